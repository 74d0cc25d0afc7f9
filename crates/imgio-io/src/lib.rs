#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, decoding/encoding failures
/// and invalid flags, classified by [`error::ErrorKind`].
pub mod error;

/// Decode backend selection.
///
/// Holds the process-wide default backend used by the free functions.
pub mod backend;

/// Color modes, channel order and the backend-specific flags they resolve to.
pub mod flags;

/// Filesystem helpers used before reading and writing.
pub mod fs;

/// High-level image reading and writing functions.
///
/// See [`functional::imread`], [`functional::imfrombytes`] and
/// [`functional::imwrite`].
pub mod functional;

/// Fast JPEG decoding.
///
/// Pure Rust decoder by default, libjpeg-turbo with the `turbojpeg` feature.
pub mod jpeg;

/// TurboJPEG decoding (feature-gated).
///
/// Requires the `turbojpeg` feature flag and libjpeg-turbo.
#[cfg(feature = "turbojpeg")]
pub mod jpegturbo;

/// General purpose decoding and encoding backed by the `image` crate.
pub mod native;

pub use crate::backend::{current_backend, set_backend, use_backend, Backend};
pub use crate::error::{ErrorKind, IoError};
pub use crate::flags::{ChannelOrder, ColorMode, JpegPixelFormat, NativeReadFlag, ReadFlag};
pub use crate::functional::{
    imencode, imfrombytes, imread, imwrite, ImageIo, ImageSource, IoConfig,
};
pub use crate::native::EncodeParam;
