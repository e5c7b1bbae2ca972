pub mod brighten;
pub mod context;
pub mod screen_texture;
