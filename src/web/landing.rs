//! Landing / sign-in page.

use crate::web::components::{AuthForm, Component, Image};
use crate::web::markup::{Element, Node};

pub const TITLE: &str = "Guftagu Chat";
pub const WELCOME_HEADING: &str = "Welcome to Guftagu Chat!";
pub const TAGLINE: &str = "Your Ultimate Chat Experience";
pub const JOIN_HEADING: &str = "Join Guftagu Chat Today!";

const HERO_BACKGROUND: &str = "background: linear-gradient(45deg, #00BFFF, #0099CC)";

const HERO_IMAGE: Image = Image {
    file: "Cartoon-Chat-Image.jpg",
    alt: "Profile",
    width: 300,
    height: 300,
    class: "mx-auto w-auto mt-6 rounded-xl",
};

const LOGO: Image = Image {
    file: "logo.png",
    alt: "logo",
    width: 64,
    height: 64,
    class: "mx-auto w-auto",
};

/// Two-column landing page: promotional copy on one side, the auth form on
/// the other. On narrow screens the form column comes first.
pub struct LandingPage<F = AuthForm> {
    form: F,
}

impl<F: Component> LandingPage<F> {
    pub fn new(form: F) -> Self {
        Self { form }
    }

    fn hero(&self) -> Element {
        Element::new("div")
            .class("lg:w-1/2 p-10")
            .attr("style", HERO_BACKGROUND)
            .child(
                Element::new("div")
                    .class("flex flex-col justify-center h-full")
                    .child(
                        Element::new("h1")
                            .class("text-4xl font-bold mb-2 text-center text-white")
                            .text(WELCOME_HEADING),
                    )
                    .child(
                        Element::new("p")
                            .class("text-lg my-6 mx-auto text-center text-white")
                            .text(TAGLINE),
                    )
                    .child(HERO_IMAGE.render()),
            )
    }

    fn form_column(&self) -> Element {
        Element::new("div").class("lg:w-1/2 bg-gray-100 p-10").child(
            Element::new("div")
                .class("sm:mx-auto flex flex-col justify-center h-full sm:w-full sm:max-w-md")
                .child(LOGO.render())
                .child(
                    Element::new("h2")
                        .class("mt-6 text-center text-3xl font-bold text-gray-900 tracking-tight")
                        .text(JOIN_HEADING),
                )
                .child(self.form.render()),
        )
    }

    /// Full HTML document around the page body.
    pub fn render_document(&self) -> String {
        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(TITLE));

        let html: Node = Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(Element::new("body").child(self.render()))
            .into();

        format!("<!DOCTYPE html>{}", html.render())
    }
}

impl Default for LandingPage<AuthForm> {
    fn default() -> Self {
        Self::new(AuthForm::default())
    }
}

impl<F: Component> Component for LandingPage<F> {
    fn render(&self) -> Node {
        Element::new("main")
            .class("flex flex-col-reverse lg:flex-row min-h-screen")
            .child(self.hero())
            .child(self.form_column())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubForm;

    impl Component for StubForm {
        fn render(&self) -> Node {
            Element::new("form").attr("id", "stub").into()
        }
    }

    #[test]
    fn test_layout_regions() {
        let page = LandingPage::default().render();

        let Node::Element(main) = &page else {
            panic!("landing page should render an element");
        };
        assert_eq!(main.tag, "main");
        assert_eq!(main.children.len(), 2);

        let hero = &main.children[0];
        let text = hero.text_content();
        assert!(text.contains(WELCOME_HEADING));
        assert!(text.contains(TAGLINE));

        let form_column = &main.children[1];
        assert_eq!(form_column.find_all("h2")[0].children, vec![Node::Text(JOIN_HEADING.to_string())]);
        assert_eq!(form_column.find_all("form").len(), 1);
    }

    #[test]
    fn test_images() {
        let page = LandingPage::default().render();
        let sources: Vec<_> = page
            .find_all("img")
            .iter()
            .filter_map(|img| img.get_attr("src"))
            .collect();

        assert_eq!(sources, vec!["/images/Cartoon-Chat-Image.jpg", "/images/logo.png"]);
    }

    #[test]
    fn test_embeds_supplied_form() {
        let page = LandingPage::new(StubForm).render();
        let forms = page.find_all("form");

        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].get_attr("id"), Some("stub"));
    }

    #[test]
    fn test_render_is_pure() {
        let page = LandingPage::default();
        assert_eq!(page.render_document(), page.render_document());
    }

    #[test]
    fn test_document() {
        let html = LandingPage::default().render_document();

        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.contains("<title>Guftagu Chat</title>"));
        assert!(html.contains("linear-gradient(45deg, #00BFFF, #0099CC)"));
        assert!(html.ends_with("</body></html>"));
    }
}
