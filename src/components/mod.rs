pub mod footer;
pub mod hero;
pub mod works;
