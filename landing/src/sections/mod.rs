// Landing page sections
// Developed by The Carbonmarket Team (c)2025

mod hero;
mod navbar;

pub use hero::{HeroSection, StatEntry};
pub use navbar::{MobilePanel, Navbar, shadow_class};
