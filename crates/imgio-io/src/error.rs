/// Broad classification of an [`IoError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument is not valid for the active backend.
    InvalidInput,
    /// The referenced file does not exist.
    NotFound,
    /// The codec rejected the data or the requested format.
    CodecFailure,
    /// The backend configuration is not valid.
    InvalidConfig,
    /// Reading, writing or creating directories failed.
    Filesystem,
}

/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a supported extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open, read, write or create the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Unknown backend name.
    #[error("Unsupported backend: {0}, expected one of native-codec, fast-jpeg")]
    InvalidBackend(String),

    /// Unknown color mode name.
    #[error("Unsupported color mode: {0}, expected one of color, grayscale, unchanged")]
    InvalidColorMode(String),

    /// The flag has no meaning for the active backend.
    #[error("Flag {flag} is not supported by the {backend} backend")]
    UnsupportedColorMode {
        /// Debug representation of the rejected flag.
        flag: String,
        /// Name of the active backend.
        backend: &'static str,
    },

    /// Error to decode the JPEG image.
    #[error("Error with Jpeg decoding. {0}")]
    JpegDecodingError(#[from] zune_jpeg::errors::DecodeErrors),

    /// Error with the libjpeg-turbo decoder.
    #[cfg(feature = "turbojpeg")]
    #[error("Error with Jpeg decoding. {0}")]
    JpegTurboError(#[from] crate::jpegturbo::JpegTurboError),

    /// Error to decode or encode with the general purpose codec.
    #[error("Failed to decode or encode the image. {0}")]
    ImageCodecError(#[from] image::ImageError),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] imgio_image::ImageError),
}

impl IoError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IoError::FileDoesNotExist(_) => ErrorKind::NotFound,
            IoError::FileError(_) => ErrorKind::Filesystem,
            IoError::InvalidBackend(_) => ErrorKind::InvalidConfig,
            IoError::InvalidColorMode(_) | IoError::UnsupportedColorMode { .. } => {
                ErrorKind::InvalidInput
            }
            IoError::InvalidFileExtension(_)
            | IoError::JpegDecodingError(_)
            | IoError::ImageCodecError(_)
            | IoError::ImageCreationError(_) => ErrorKind::CodecFailure,
            #[cfg(feature = "turbojpeg")]
            IoError::JpegTurboError(_) => ErrorKind::CodecFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        let err = IoError::FileDoesNotExist("missing.png".into());
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = IoError::InvalidBackend("opencv".to_string());
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.to_string().contains("opencv"));

        let err = IoError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::Filesystem);

        let err = IoError::from(imgio_image::ImageError::UnsupportedChannels(2));
        assert_eq!(err.kind(), ErrorKind::CodecFailure);
    }
}
