pub mod constants;
pub mod dom;
pub mod render;
