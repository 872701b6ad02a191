pub mod models;
pub mod render;
pub mod session;
