//! Errors raised at the I/O boundary of the renderer
//!
//! Tracing itself never fails: misses shade with the background color and
//! degenerate geometry is the caller's responsibility.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid texture: {0}")]
    Texture(String),
}

pub type Result<T> = std::result::Result<T, Error>;
