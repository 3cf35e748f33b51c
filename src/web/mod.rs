//! Server-rendered pages.

mod components;
mod landing;
pub mod markup;

pub use components::{AuthForm, AuthVariant, IMAGE_ROOT};
pub use landing::LandingPage;
