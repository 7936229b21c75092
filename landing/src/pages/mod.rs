// Landing page routes
// Developed by The Carbonmarket Team (c)2025

mod home;

pub use home::HomePage;
