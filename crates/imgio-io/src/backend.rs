use std::{
    fmt,
    str::FromStr,
    sync::atomic::{AtomicU8, Ordering},
};

use crate::error::IoError;

/// The library used to decode images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// General purpose codec, any format the `image` crate reads.
    #[default]
    NativeCodec,
    /// Specialized JPEG decoder, JPEG input only.
    FastJpeg,
}

impl Backend {
    /// Canonical name of the backend.
    pub const fn name(&self) -> &'static str {
        match self {
            Backend::NativeCodec => "native-codec",
            Backend::FastJpeg => "fast-jpeg",
        }
    }

    const fn to_u8(self) -> u8 {
        match self {
            Backend::NativeCodec => 0,
            Backend::FastJpeg => 1,
        }
    }

    const fn from_u8(v: u8) -> Self {
        match v {
            1 => Backend::FastJpeg,
            _ => Backend::NativeCodec,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the legacy names are accepted too
        match s {
            "native-codec" | "cv2" | "image" => Ok(Backend::NativeCodec),
            "fast-jpeg" | "turbojpeg" => Ok(Backend::FastJpeg),
            other => Err(IoError::InvalidBackend(other.to_string())),
        }
    }
}

static BACKEND: AtomicU8 = AtomicU8::new(Backend::NativeCodec.to_u8());

/// Returns the process-wide default backend.
pub fn current_backend() -> Backend {
    Backend::from_u8(BACKEND.load(Ordering::Acquire))
}

/// Sets the process-wide default backend.
///
/// Affects every later call to the free functions in [`crate::functional`],
/// from any thread. Images returned before the switch are not touched.
pub fn set_backend(backend: Backend) {
    let previous = Backend::from_u8(BACKEND.swap(backend.to_u8(), Ordering::AcqRel));
    log::debug!("image backend: {} -> {}", previous, backend);
}

/// Selects the process-wide default backend by name.
///
/// # Arguments
///
/// * `name` - One of `native-codec` or `fast-jpeg`.
///
/// # Errors
///
/// Returns [`IoError::InvalidBackend`] for any other name; the current
/// backend is left unchanged in that case.
///
/// # Example
///
/// ```
/// use imgio_io::{current_backend, use_backend, Backend};
///
/// use_backend("fast-jpeg").unwrap();
/// assert_eq!(current_backend(), Backend::FastJpeg);
/// assert!(use_backend("opencv").is_err());
/// assert_eq!(current_backend(), Backend::FastJpeg);
/// use_backend("native-codec").unwrap();
/// ```
pub fn use_backend(name: &str) -> Result<(), IoError> {
    set_backend(name.parse()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_backend() -> Result<(), IoError> {
        assert_eq!("native-codec".parse::<Backend>()?, Backend::NativeCodec);
        assert_eq!("cv2".parse::<Backend>()?, Backend::NativeCodec);
        assert_eq!("fast-jpeg".parse::<Backend>()?, Backend::FastJpeg);
        assert_eq!("turbojpeg".parse::<Backend>()?, Backend::FastJpeg);
        assert!(matches!(
            "pillow".parse::<Backend>(),
            Err(IoError::InvalidBackend(name)) if name == "pillow"
        ));
        Ok(())
    }

    #[test]
    fn backend_name_roundtrip() -> Result<(), IoError> {
        for backend in [Backend::NativeCodec, Backend::FastJpeg] {
            assert_eq!(backend.to_string().parse::<Backend>()?, backend);
            assert_eq!(Backend::from_u8(backend.to_u8()), backend);
        }
        assert_eq!(Backend::default(), Backend::NativeCodec);
        Ok(())
    }
}
