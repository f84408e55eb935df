//! Render binding for the radar sphere and its host integration.

mod custom;
mod radar_sphere;
mod state;


pub use custom::*;
pub use radar_sphere::*;
pub use state::LayerStatus;
