use imgio_image::{GenericImage, ImageError, ImageSize};
use zune_core::{colorspace::ColorSpace, options::DecoderOptions};
use zune_jpeg::{errors::DecodeErrors, JpegDecoder};

use crate::{error::IoError, flags::JpegPixelFormat};

/// Decodes a JPEG image from raw bytes with the fast JPEG decoder.
///
/// Uses libjpeg-turbo when the `turbojpeg` feature is enabled and
/// [`decode_zune`] otherwise.
///
/// # Arguments
///
/// * `src` - Raw bytes of the JPEG file.
/// * `format` - Output pixel format.
///
/// # Returns
///
/// A [`GenericImage::Color8`] or [`GenericImage::Gray8`] image.
#[cfg(feature = "turbojpeg")]
pub fn decode(src: &[u8], format: JpegPixelFormat) -> Result<GenericImage, IoError> {
    let decoder = crate::jpegturbo::JpegTurboDecoder::new()?;
    Ok(decoder.decode(src, format)?)
}

/// Decodes a JPEG image from raw bytes with the fast JPEG decoder.
///
/// Uses libjpeg-turbo when the `turbojpeg` feature is enabled and
/// [`decode_zune`] otherwise.
#[cfg(not(feature = "turbojpeg"))]
pub fn decode(src: &[u8], format: JpegPixelFormat) -> Result<GenericImage, IoError> {
    decode_zune(src, format)
}

/// Decodes a JPEG image from raw bytes with the pure Rust decoder.
///
/// Grayscale sources requested in color are expanded to three channels.
pub fn decode_zune(src: &[u8], format: JpegPixelFormat) -> Result<GenericImage, IoError> {
    let colorspace = match format {
        JpegPixelFormat::Gray => ColorSpace::Luma,
        JpegPixelFormat::Rgb | JpegPixelFormat::Bgr => ColorSpace::RGB,
    };
    let options = DecoderOptions::default().jpeg_set_out_colorspace(colorspace);

    let mut decoder = JpegDecoder::new_with_options(src, options);
    decoder.decode_headers()?;

    let image_info = decoder.info().ok_or_else(|| {
        IoError::JpegDecodingError(DecodeErrors::Format(String::from(
            "Failed to find image info from its metadata",
        )))
    })?;

    let image_size = ImageSize {
        width: image_info.width as usize,
        height: image_info.height as usize,
    };

    let img_data = decoder.decode()?;

    let channels = match image_size.area() {
        0 => format.channels(),
        area => img_data.len() / area,
    };
    let img_data = match (channels, format.channels()) {
        (got, want) if got == want => img_data,
        (1, 3) => img_data.iter().flat_map(|&v| [v, v, v]).collect(),
        (got, _) => return Err(ImageError::UnsupportedChannels(got).into()),
    };

    let mut image = GenericImage::from_u8(image_size, format.channels(), img_data)?;
    if format == JpegPixelFormat::Bgr {
        image.swap_rb();
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, flags::ChannelOrder, flags::NativeReadFlag, native};
    use image::ImageFormat;
    use imgio_image::Image;

    fn sample_jpeg() -> Result<Vec<u8>, IoError> {
        let mut data = Vec::with_capacity(40 * 30 * 3);
        for y in 0..30 {
            for x in 0..40 {
                data.extend_from_slice(&[200, (x * 5) as u8, (y * 7) as u8]);
            }
        }
        let image: GenericImage = Image::<u8, 3>::new([40, 30].into(), data)?.into();
        native::encode(&image, ImageFormat::Jpeg, &[], ChannelOrder::Rgb)
    }

    #[test]
    fn decode_color_and_gray() -> Result<(), IoError> {
        let bytes = sample_jpeg()?;

        let rgb = decode_zune(&bytes, JpegPixelFormat::Rgb)?;
        assert_eq!(rgb.shape(), [30, 40, 3]);

        let gray = decode_zune(&bytes, JpegPixelFormat::Gray)?;
        assert_eq!(gray.shape(), [30, 40, 1]);

        let mut bgr = decode_zune(&bytes, JpegPixelFormat::Bgr)?;
        bgr.swap_rb();
        assert_eq!(bgr, rgb);
        Ok(())
    }

    #[test]
    fn decode_gray_source_as_color() -> Result<(), IoError> {
        let gray: GenericImage = Image::<u8, 1>::from_size_val([16, 8].into(), 90)?.into();
        let bytes = native::encode(&gray, ImageFormat::Jpeg, &[], ChannelOrder::Bgr)?;

        let color = decode_zune(&bytes, JpegPixelFormat::Bgr)?;
        assert_eq!(color.shape(), [8, 16, 3]);
        Ok(())
    }

    #[test]
    fn matches_native_shape() -> Result<(), IoError> {
        let bytes = sample_jpeg()?;
        let fast = decode(&bytes, JpegPixelFormat::Gray)?;
        let slow = native::decode(&bytes, NativeReadFlag::Grayscale, ChannelOrder::Bgr)?;
        assert_eq!(fast.shape(), slow.shape());
        assert_eq!(fast.dtype(), slow.dtype());
        Ok(())
    }

    #[test]
    fn reject_non_jpeg() -> Result<(), IoError> {
        let png: GenericImage = Image::<u8, 3>::from_size_val([4, 4].into(), 1)?.into();
        let bytes = native::encode(&png, ImageFormat::Png, &[], ChannelOrder::Bgr)?;
        let err = decode(&bytes, JpegPixelFormat::Rgb).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CodecFailure);
        Ok(())
    }
}
