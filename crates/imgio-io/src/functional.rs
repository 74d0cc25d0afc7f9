use std::path::{Path, PathBuf};

use image::ImageFormat;
use imgio_image::GenericImage;

use crate::{
    backend::{current_backend, Backend},
    error::IoError,
    flags::{resolve_jpeg, resolve_native, ChannelOrder, ReadFlag},
    fs::{check_file_exist, mkdir_or_exist},
    jpeg, native,
    native::EncodeParam,
};

/// Something [`imread`] can turn into an image.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    /// An image that is already decoded, returned as is.
    Image(GenericImage),
    /// A path to an encoded image file.
    Path(PathBuf),
}

impl From<GenericImage> for ImageSource {
    fn from(image: GenericImage) -> Self {
        ImageSource::Image(image)
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<&PathBuf> for ImageSource {
    fn from(path: &PathBuf) -> Self {
        ImageSource::Path(path.clone())
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::Path(path.into())
    }
}

impl From<String> for ImageSource {
    fn from(path: String) -> Self {
        ImageSource::Path(path.into())
    }
}

/// Configuration of an [`ImageIo`] dispatcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IoConfig {
    /// Decoder used by `imread` and `imfrombytes`.
    pub backend: Backend,
    /// Channel order of decoded color images and of images given to `imwrite`.
    pub channel_order: ChannelOrder,
}

/// Reads and writes images with a fixed configuration.
///
/// Unlike the free functions, an `ImageIo` does not look at the process-wide
/// backend, so it can be shared between threads that need different backends.
///
/// # Example
///
/// ```no_run
/// use imgio_io::{Backend, ColorMode, ImageIo, IoConfig};
///
/// let io = ImageIo::new(IoConfig {
///     backend: Backend::FastJpeg,
///     ..Default::default()
/// });
///
/// let image = io.imread("photo.jpg", ColorMode::Grayscale).unwrap();
/// assert_eq!(image.num_channels(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageIo {
    config: IoConfig,
}

impl ImageIo {
    /// Creates a dispatcher from an explicit configuration.
    pub fn new(config: IoConfig) -> Self {
        Self { config }
    }

    /// Creates a dispatcher using the process-wide backend and BGR order.
    pub fn from_global() -> Self {
        Self::new(IoConfig {
            backend: current_backend(),
            channel_order: ChannelOrder::default(),
        })
    }

    /// The configuration of this dispatcher.
    pub fn config(&self) -> IoConfig {
        self.config
    }

    /// Returns a copy using the given backend.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    /// Returns a copy using the given channel order.
    pub fn with_channel_order(mut self, channel_order: ChannelOrder) -> Self {
        self.config.channel_order = channel_order;
        self
    }

    /// Reads an image.
    ///
    /// # Arguments
    ///
    /// * `source` - A decoded image, returned unchanged, or a file path.
    /// * `flag` - Color mode, or a flag already resolved for the backend.
    ///
    /// # Errors
    ///
    /// - [`IoError::UnsupportedColorMode`] when the flag does not apply to the backend.
    /// - [`IoError::FileDoesNotExist`] when the path is missing.
    /// - A codec error when the file cannot be decoded.
    pub fn imread(
        &self,
        source: impl Into<ImageSource>,
        flag: impl Into<ReadFlag>,
    ) -> Result<GenericImage, IoError> {
        let file_path = match source.into() {
            ImageSource::Image(image) => return Ok(image),
            ImageSource::Path(file_path) => file_path,
        };
        let flag = flag.into();

        match self.config.backend {
            Backend::FastJpeg => {
                let format = resolve_jpeg(flag, self.config.channel_order)?;
                check_file_exist(&file_path)?;
                log::debug!("fast-jpeg decode {} as {:?}", file_path.display(), format);
                let content = std::fs::read(&file_path)?;
                jpeg::decode(&content, format)
            }
            Backend::NativeCodec => {
                let native_flag = resolve_native(flag)?;
                check_file_exist(&file_path)?;
                log::debug!(
                    "native decode {} as {:?}",
                    file_path.display(),
                    native_flag
                );
                let content = std::fs::read(&file_path)?;
                native::decode(&content, native_flag, self.config.channel_order)
            }
        }
    }

    /// Reads an image from bytes.
    ///
    /// Same as [`ImageIo::imread`] for in-memory content.
    pub fn imfrombytes(
        &self,
        content: &[u8],
        flag: impl Into<ReadFlag>,
    ) -> Result<GenericImage, IoError> {
        let flag = flag.into();
        match self.config.backend {
            Backend::FastJpeg => {
                jpeg::decode(content, resolve_jpeg(flag, self.config.channel_order)?)
            }
            Backend::NativeCodec => native::decode(
                content,
                resolve_native(flag)?,
                self.config.channel_order,
            ),
        }
    }

    /// Encodes an image in memory with the general purpose codec.
    pub fn imencode(
        &self,
        image: &GenericImage,
        format: ImageFormat,
        params: &[EncodeParam],
    ) -> Result<Vec<u8>, IoError> {
        native::encode(image, format, params, self.config.channel_order)
    }

    /// Writes an image to a file.
    ///
    /// The format is taken from the file extension. Encoding always uses the
    /// general purpose codec, whatever the decode backend is.
    ///
    /// # Arguments
    ///
    /// * `image` - The image to write, color samples in the configured order.
    /// * `file_path` - Destination path.
    /// * `params` - Encoder parameters.
    /// * `auto_mkdir` - Create the parent directory if it is missing.
    pub fn imwrite(
        &self,
        image: &GenericImage,
        file_path: impl AsRef<Path>,
        params: &[EncodeParam],
        auto_mkdir: bool,
    ) -> Result<(), IoError> {
        let file_path = file_path.as_ref();
        if auto_mkdir {
            if let Some(dir_name) = file_path.parent() {
                mkdir_or_exist(dir_name)?;
            }
        }

        let format = native::format_from_path(file_path)?;
        let data = self.imencode(image, format, params)?;
        std::fs::write(file_path, data)?;

        Ok(())
    }
}

/// Reads an image with the process-wide backend.
///
/// See [`ImageIo::imread`].
///
/// # Example
///
/// ```no_run
/// use imgio_io::{functional as F, ColorMode};
///
/// let image = F::imread("photo.jpg", ColorMode::Color).unwrap();
/// assert_eq!(image.num_channels(), 3);
/// ```
pub fn imread(
    source: impl Into<ImageSource>,
    flag: impl Into<ReadFlag>,
) -> Result<GenericImage, IoError> {
    ImageIo::from_global().imread(source, flag)
}

/// Reads an image from bytes with the process-wide backend.
///
/// See [`ImageIo::imfrombytes`].
pub fn imfrombytes(content: &[u8], flag: impl Into<ReadFlag>) -> Result<GenericImage, IoError> {
    ImageIo::from_global().imfrombytes(content, flag)
}

/// Encodes a BGR-ordered image in memory.
///
/// See [`ImageIo::imencode`].
pub fn imencode(
    image: &GenericImage,
    format: ImageFormat,
    params: &[EncodeParam],
) -> Result<Vec<u8>, IoError> {
    ImageIo::from_global().imencode(image, format, params)
}

/// Writes a BGR-ordered image to a file.
///
/// See [`ImageIo::imwrite`].
pub fn imwrite(
    image: &GenericImage,
    file_path: impl AsRef<Path>,
    params: &[EncodeParam],
    auto_mkdir: bool,
) -> Result<(), IoError> {
    ImageIo::from_global().imwrite(image, file_path, params, auto_mkdir)
}
