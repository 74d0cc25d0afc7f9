use std::sync::Mutex;

use imgio_image::{GenericImage, ImageError, ImageSize};

use crate::flags::JpegPixelFormat;

/// Error types for the TurboJPEG module.
#[derive(thiserror::Error, Debug)]
pub enum JpegTurboError {
    /// Error reported by libjpeg-turbo.
    #[error("Something went wrong with the JPEG decompressor")]
    TurboJpegError(#[from] turbojpeg::Error),

    /// The decompressor lock was poisoned by a panicking thread.
    #[error("The JPEG decompressor lock is poisoned")]
    LockPoisoned,

    /// Error to create the image.
    #[error("Failed to create image")]
    ImageCreationError(#[from] ImageError),
}

/// A JPEG decoder using the turbojpeg library.
pub struct JpegTurboDecoder(Mutex<turbojpeg::Decompressor>);

impl JpegTurboDecoder {
    /// Creates a new `JpegTurboDecoder`.
    pub fn new() -> Result<Self, JpegTurboError> {
        let decompressor = turbojpeg::Decompressor::new()?;
        Ok(JpegTurboDecoder(Mutex::new(decompressor)))
    }

    /// Reads the size of a JPEG image from its header.
    pub fn read_header(&self, jpeg_data: &[u8]) -> Result<ImageSize, JpegTurboError> {
        let header = self
            .0
            .lock()
            .map_err(|_| JpegTurboError::LockPoisoned)?
            .read_header(jpeg_data)?;

        Ok(ImageSize {
            width: header.width,
            height: header.height,
        })
    }

    /// Decodes the given JPEG data in the requested pixel format.
    ///
    /// libjpeg-turbo converts color and grayscale sources to `format` itself.
    pub fn decode(
        &self,
        jpeg_data: &[u8],
        format: JpegPixelFormat,
    ) -> Result<GenericImage, JpegTurboError> {
        let image_size = self.read_header(jpeg_data)?;

        let pixel_format = match format {
            JpegPixelFormat::Bgr => turbojpeg::PixelFormat::BGR,
            JpegPixelFormat::Rgb => turbojpeg::PixelFormat::RGB,
            JpegPixelFormat::Gray => turbojpeg::PixelFormat::GRAY,
        };
        let channels = format.channels();

        let mut pixels = vec![0u8; image_size.area() * channels];

        // no padding between rows
        let buf = turbojpeg::Image {
            pixels: pixels.as_mut_slice(),
            width: image_size.width,
            pitch: channels * image_size.width,
            height: image_size.height,
            format: pixel_format,
        };

        self.0
            .lock()
            .map_err(|_| JpegTurboError::LockPoisoned)?
            .decompress(jpeg_data, buf)?;

        Ok(GenericImage::from_u8(image_size, channels, pixels)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{flags::ChannelOrder, native};
    use image::ImageFormat;
    use imgio_image::Image;

    #[test]
    fn image_decoder() -> Result<(), Box<dyn std::error::Error>> {
        let image: GenericImage = Image::<u8, 3>::from_size_val([25, 10].into(), 60)?.into();
        let jpeg_data = native::encode(&image, ImageFormat::Jpeg, &[], ChannelOrder::Rgb)?;

        let decoder = JpegTurboDecoder::new()?;
        let image_size = decoder.read_header(&jpeg_data)?;
        assert_eq!(image_size.width, 25);
        assert_eq!(image_size.height, 10);

        let image = decoder.decode(&jpeg_data, JpegPixelFormat::Bgr)?;
        assert_eq!(image.shape(), [10, 25, 3]);

        let gray = decoder.decode(&jpeg_data, JpegPixelFormat::Gray)?;
        assert_eq!(gray.shape(), [10, 25, 1]);
        Ok(())
    }
}
