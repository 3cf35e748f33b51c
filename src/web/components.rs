//! Reusable page components.

use crate::web::markup::{Element, Node};

/// Public path under which images are served.
pub const IMAGE_ROOT: &str = "/images";

/// Something that renders to a markup tree.
pub trait Component {
    fn render(&self) -> Node;
}

/// An image served from the public image directory.
#[derive(Debug, Clone)]
pub struct Image {
    pub file: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
    pub class: &'static str,
}

impl Image {
    pub fn src(&self) -> String {
        format!("{}/{}", IMAGE_ROOT, self.file)
    }
}

impl Component for Image {
    fn render(&self) -> Node {
        Element::new("img")
            .attr("src", self.src())
            .attr("alt", self.alt)
            .attr("width", self.width.to_string())
            .attr("height", self.height.to_string())
            .attr("loading", "lazy")
            .class(self.class)
            .into()
    }
}

/// Whether the auth form signs in or registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthVariant {
    #[default]
    Login,
    Register,
}

/// The sign-in / registration form.
///
/// Only the markup lives here. Credentials are posted to `action` and handled
/// elsewhere.
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub variant: AuthVariant,
    pub action: &'static str,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            variant: AuthVariant::Login,
            action: "/api/auth",
        }
    }
}

impl AuthForm {
    fn field(name: &'static str, label: &'static str, kind: &'static str) -> Element {
        Element::new("div")
            .child(
                Element::new("label")
                    .attr("for", name)
                    .class("block text-sm font-medium leading-6 text-gray-900")
                    .text(label),
            )
            .child(
                Element::new("input")
                    .attr("id", name)
                    .attr("name", name)
                    .attr("type", kind)
                    .attr("required", "required")
                    .class("form-input block w-full rounded-md border-0 py-1.5 text-gray-900 shadow-sm"),
            )
    }
}

impl Component for AuthForm {
    fn render(&self) -> Node {
        let (submit, toggle_prompt, toggle_label, toggle_variant) = match self.variant {
            AuthVariant::Login => ("Sign in", "New to Guftagu Chat?", "Create an account", "register"),
            AuthVariant::Register => ("Register", "Already have an account?", "Login", "login"),
        };

        let mut form = Element::new("form")
            .attr("method", "post")
            .attr("action", self.action)
            .class("space-y-6");

        if self.variant == AuthVariant::Register {
            form = form.child(Self::field("name", "Name", "text"));
        }

        let form = form
            .child(Self::field("email", "Email address", "email"))
            .child(Self::field("password", "Password", "password"))
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .class("flex w-full justify-center rounded-md bg-sky-500 px-3 py-2 text-sm font-semibold text-white")
                    .text(submit),
            );

        Element::new("div")
            .class("mt-8 bg-white px-4 py-8 shadow sm:rounded-lg sm:px-10")
            .child(form)
            .child(
                Element::new("div")
                    .class("mt-6 flex justify-center gap-2 px-2 text-sm text-gray-500")
                    .child(Element::new("span").text(toggle_prompt))
                    .child(
                        Element::new("a")
                            .attr("href", format!("/?variant={toggle_variant}"))
                            .class("underline cursor-pointer")
                            .text(toggle_label),
                    ),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_render() {
        let image = Image {
            file: "logo.png",
            alt: "logo",
            width: 64,
            height: 64,
            class: "mx-auto w-auto",
        };

        let html = image.render().render();
        assert!(html.starts_with("<img "));
        assert!(html.contains(r#"src="/images/logo.png""#));
        assert!(html.contains(r#"width="64""#));
        assert!(html.contains(r#"alt="logo""#));
    }

    #[test]
    fn test_login_form() {
        let node = AuthForm::default().render();

        let inputs = node.find_all("input");
        let names: Vec<_> = inputs.iter().filter_map(|i| i.get_attr("name")).collect();
        assert_eq!(names, vec!["email", "password"]);
        assert!(node.text_content().contains("Sign in"));
        assert_eq!(node.find_all("form")[0].get_attr("action"), Some("/api/auth"));
    }

    #[test]
    fn test_register_form_adds_name() {
        let form = AuthForm {
            variant: AuthVariant::Register,
            ..AuthForm::default()
        };
        let node = form.render();

        assert_eq!(node.find_all("input").len(), 3);
        assert!(node.text_content().contains("Already have an account?"));
        let links = node.find_all("a");
        assert_eq!(links[0].get_attr("href"), Some("/?variant=login"));
    }
}
