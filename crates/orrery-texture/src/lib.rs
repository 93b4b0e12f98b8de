//! Procedural texture synthesis for the orrery.
//!
//! Every texture is a pure function of a seed, a [`TextureStrategy`] and an
//! edge length, producing a square RGBA [`Pixmap`]. Nothing here depends on a
//! rendering backend, so textures can be generated and inspected headlessly.

pub mod color;
mod error;
pub mod lcg;
mod pixmap;
pub mod raster;
pub mod starfield;
mod strategy;

pub use color::{Paint, Rgb};
pub use error::TextureError;
pub use lcg::Lcg;
pub use pixmap::Pixmap;
pub use starfield::{StarPoint, StarfieldGenerator};
pub use strategy::{
    ROCK_NOISE, STRIPE_NOISE, TERRESTRIAL_NOISE, TextureStrategy, synthesize,
};

/// Default texture edge length in pixels.
pub const DEFAULT_TEXTURE_SIZE: u32 = 512;
/// Default edge length of the sun glow sprite.
pub const DEFAULT_GLOW_SIZE: u32 = 128;
