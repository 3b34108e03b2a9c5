//! A recursive ray tracer for scenes of analytic shapes lit by point and spot lights

pub mod camera;
pub mod color;
pub mod error;
pub mod framebuffer;
pub mod hittables;
pub mod light;
pub mod material;
pub mod ray;
pub mod render;
pub mod scene;
pub mod textures;

// public: commandline parser
pub mod cli;
// public: scene selection
pub mod scenes;

mod utils;

pub use error::{Error, Result};
