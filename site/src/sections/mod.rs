// Page blocks, in document order

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod process;
mod services;
mod work;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::{Hero, ViewerPanel};
pub use process::ProcessSection;
pub use services::ServicesSection;
pub use work::WorkSection;
