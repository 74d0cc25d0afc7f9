//! Backend-agnostic image reading and writing.
//!
//! ```no_run
//! use imgio::io::{functional as F, use_backend, ColorMode};
//!
//! use_backend("fast-jpeg").unwrap();
//! let image = F::imread("photo.jpg", ColorMode::Color).unwrap();
//! F::imwrite(&image, "out/photo.png", &[], true).unwrap();
//! ```

#[doc(inline)]
pub use imgio_image as image;

#[doc(inline)]
pub use imgio_io as io;
