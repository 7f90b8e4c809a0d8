mod render;
mod route;
mod screen;

pub use render::render;
pub use route::{Route, RouteParseError};
pub use screen::{Screen, resolve};
