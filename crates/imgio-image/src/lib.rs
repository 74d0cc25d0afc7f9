#![deny(missing_docs)]
//! Owned image buffers returned by the imgio decoders

/// Typed image representation with interleaved channels.
pub mod image;

/// Tagged union over the typed images a decoder can produce.
pub mod generic;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::generic::{GenericImage, SampleType};
pub use crate::image::{Image, ImageSize};
