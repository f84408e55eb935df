//! Radar sphere geometry: UV-sphere generation and MVP math.
//!
//! The mesh is unit-radius; the radar shell radius is applied in the
//! vertex stage so one mesh serves every offset.

pub mod matrix;
mod mesh;
mod types;

pub use mesh::*;
pub use types::*;
