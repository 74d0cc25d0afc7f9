use std::{fmt, str::FromStr};

use crate::{backend::Backend, error::IoError};

/// How the channels of a decoded image are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Three channel 8-bit color.
    #[default]
    Color,
    /// Single channel 8-bit luminance.
    Grayscale,
    /// Channels and depth as stored in the file.
    Unchanged,
}

impl FromStr for ColorMode {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(ColorMode::Color),
            "grayscale" => Ok(ColorMode::Grayscale),
            "unchanged" => Ok(ColorMode::Unchanged),
            other => Err(IoError::InvalidColorMode(other.to_string())),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorMode::Color => "color",
            ColorMode::Grayscale => "grayscale",
            ColorMode::Unchanged => "unchanged",
        })
    }
}

/// Order of the color samples in three and four channel images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Blue, green, red.
    #[default]
    Bgr,
    /// Red, green, blue.
    Rgb,
}

impl FromStr for ChannelOrder {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bgr" => Ok(ChannelOrder::Bgr),
            "rgb" => Ok(ChannelOrder::Rgb),
            other => Err(IoError::InvalidColorMode(other.to_string())),
        }
    }
}

/// Read flag understood by the general purpose codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeReadFlag {
    /// 8-bit, three channels.
    Color,
    /// 8-bit, one channel.
    Grayscale,
    /// Channels and depth as stored, alpha included.
    Unchanged,
    /// Three channels, 16-bit sources stay 16-bit.
    ColorAnyDepth,
    /// One channel, 16-bit sources stay 16-bit.
    GrayscaleAnyDepth,
}

/// Output pixel format of the fast JPEG decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JpegPixelFormat {
    /// Blue, green, red.
    Bgr,
    /// Red, green, blue.
    Rgb,
    /// Luminance only.
    Gray,
}

impl JpegPixelFormat {
    /// Samples per pixel.
    pub const fn channels(&self) -> usize {
        match self {
            JpegPixelFormat::Bgr | JpegPixelFormat::Rgb => 3,
            JpegPixelFormat::Gray => 1,
        }
    }
}

/// A read flag: either a symbolic mode or an already resolved backend flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadFlag {
    /// Symbolic mode, resolved against the active backend.
    Mode(ColorMode),
    /// Passed through unchanged to the general purpose codec.
    Native(NativeReadFlag),
    /// Passed through unchanged to the fast JPEG decoder.
    Jpeg(JpegPixelFormat),
}

impl Default for ReadFlag {
    fn default() -> Self {
        ReadFlag::Mode(ColorMode::Color)
    }
}

impl From<ColorMode> for ReadFlag {
    fn from(mode: ColorMode) -> Self {
        ReadFlag::Mode(mode)
    }
}

impl From<NativeReadFlag> for ReadFlag {
    fn from(flag: NativeReadFlag) -> Self {
        ReadFlag::Native(flag)
    }
}

impl From<JpegPixelFormat> for ReadFlag {
    fn from(format: JpegPixelFormat) -> Self {
        ReadFlag::Jpeg(format)
    }
}

impl FromStr for ReadFlag {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ReadFlag::Mode(s.parse()?))
    }
}

fn unsupported(flag: ReadFlag, backend: Backend) -> IoError {
    IoError::UnsupportedColorMode {
        flag: format!("{flag:?}"),
        backend: backend.name(),
    }
}

/// Resolves a flag for the general purpose codec.
///
/// # Errors
///
/// A flag resolved for the fast JPEG decoder is rejected.
pub fn resolve_native(flag: ReadFlag) -> Result<NativeReadFlag, IoError> {
    match flag {
        ReadFlag::Mode(ColorMode::Color) => Ok(NativeReadFlag::Color),
        ReadFlag::Mode(ColorMode::Grayscale) => Ok(NativeReadFlag::Grayscale),
        ReadFlag::Mode(ColorMode::Unchanged) => Ok(NativeReadFlag::Unchanged),
        ReadFlag::Native(flag) => Ok(flag),
        ReadFlag::Jpeg(_) => Err(unsupported(flag, Backend::NativeCodec)),
    }
}

/// Resolves a flag for the fast JPEG decoder.
///
/// # Errors
///
/// [`ColorMode::Unchanged`] has no fast JPEG equivalent and is rejected, as
/// is any flag resolved for the general purpose codec.
pub fn resolve_jpeg(flag: ReadFlag, order: ChannelOrder) -> Result<JpegPixelFormat, IoError> {
    match flag {
        ReadFlag::Mode(ColorMode::Color) => Ok(match order {
            ChannelOrder::Bgr => JpegPixelFormat::Bgr,
            ChannelOrder::Rgb => JpegPixelFormat::Rgb,
        }),
        ReadFlag::Mode(ColorMode::Grayscale) => Ok(JpegPixelFormat::Gray),
        ReadFlag::Jpeg(format) => Ok(format),
        ReadFlag::Mode(ColorMode::Unchanged) | ReadFlag::Native(_) => {
            Err(unsupported(flag, Backend::FastJpeg))
        }
    }
}
