use std::{io::Cursor, path::Path};

use image::{
    codecs::{
        jpeg::JpegEncoder,
        png::{CompressionType, FilterType, PngEncoder},
    },
    DynamicImage, ImageBuffer, ImageFormat, Luma, Pixel, Rgb, Rgba,
};
use imgio_image::{GenericImage, Image, ImageError};

use crate::{
    error::IoError,
    flags::{ChannelOrder, NativeReadFlag},
};

/// Default JPEG quality, 0 (lowest) to 100 (highest).
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Default PNG compression level, 0 (fastest) to 9 (smallest).
pub const DEFAULT_PNG_COMPRESSION: u8 = 3;

/// Encoder parameter for the general purpose codec.
///
/// Parameters that do not apply to the output format are ignored; when a
/// parameter is repeated the last one wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeParam {
    /// JPEG quality, 0 (lowest) to 100 (highest).
    JpegQuality(u8),
    /// PNG compression level, 0 (fastest) to 9 (smallest).
    PngCompression(u8),
}

/// Guesses the output format from the extension of `file_path`.
pub fn format_from_path(file_path: impl AsRef<Path>) -> Result<ImageFormat, IoError> {
    let file_path = file_path.as_ref();
    ImageFormat::from_path(file_path)
        .map_err(|_| IoError::InvalidFileExtension(file_path.to_path_buf()))
}

/// Decodes an image of any supported format from raw bytes.
///
/// # Arguments
///
/// * `src` - The encoded image; the format is sniffed from its content.
/// * `flag` - Layout of the returned image.
/// * `order` - Channel order of color outputs.
///
/// # Errors
///
/// Unrecognized or malformed data fails with [`IoError::ImageCodecError`].
pub fn decode(
    src: &[u8],
    flag: NativeReadFlag,
    order: ChannelOrder,
) -> Result<GenericImage, IoError> {
    let img = image::load_from_memory(src)?;
    let deep = is_deep(&img);

    let mut out = match flag {
        NativeReadFlag::Color => GenericImage::Color8(from_buffer(img.into_rgb8())?),
        NativeReadFlag::Grayscale => GenericImage::Gray8(from_buffer(img.into_luma8())?),
        NativeReadFlag::ColorAnyDepth if deep => {
            GenericImage::Color16(from_buffer(img.into_rgb16())?)
        }
        NativeReadFlag::ColorAnyDepth => GenericImage::Color8(from_buffer(img.into_rgb8())?),
        NativeReadFlag::GrayscaleAnyDepth if deep => {
            GenericImage::Gray16(from_buffer(img.into_luma16())?)
        }
        NativeReadFlag::GrayscaleAnyDepth => {
            GenericImage::Gray8(from_buffer(img.into_luma8())?)
        }
        NativeReadFlag::Unchanged => unchanged(img)?,
    };

    if order == ChannelOrder::Bgr {
        out.swap_rb();
    }

    Ok(out)
}

/// Encodes an image into the given format.
///
/// Color images are read in `order`; the encoded file always stores RGB.
///
/// # Errors
///
/// Fails with [`IoError::ImageCodecError`] when the format cannot hold the
/// image layout (e.g. 16-bit JPEG) or has no encoder.
pub fn encode(
    image: &GenericImage,
    format: ImageFormat,
    params: &[EncodeParam],
    order: ChannelOrder,
) -> Result<Vec<u8>, IoError> {
    let dynamic = to_dynamic(image, order)?;
    let mut buf = Cursor::new(Vec::new());

    match format {
        ImageFormat::Jpeg => {
            let quality = params
                .iter()
                .rev()
                .find_map(|p| match p {
                    EncodeParam::JpegQuality(q) => Some(*q),
                    _ => None,
                })
                .unwrap_or(DEFAULT_JPEG_QUALITY);
            // the encoder rejects 0
            let encoder = JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
            dynamic.write_with_encoder(encoder)?;
        }
        ImageFormat::Png => {
            let level = params
                .iter()
                .rev()
                .find_map(|p| match p {
                    EncodeParam::PngCompression(l) => Some(*l),
                    _ => None,
                })
                .unwrap_or(DEFAULT_PNG_COMPRESSION);
            let compression = match level {
                0..=2 => CompressionType::Fast,
                3..=6 => CompressionType::Default,
                _ => CompressionType::Best,
            };
            let encoder = PngEncoder::new_with_quality(&mut buf, compression, FilterType::Adaptive);
            dynamic.write_with_encoder(encoder)?;
        }
        other => dynamic.write_to(&mut buf, other)?,
    }

    Ok(buf.into_inner())
}

fn is_deep(img: &DynamicImage) -> bool {
    matches!(
        img,
        DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_)
            | DynamicImage::ImageRgb32F(_)
            | DynamicImage::ImageRgba32F(_)
    )
}

// keeps channel count and depth; gray + alpha is widened to color + alpha
fn unchanged(img: DynamicImage) -> Result<GenericImage, IoError> {
    let deep = is_deep(&img);
    Ok(match img {
        DynamicImage::ImageLuma8(buf) => GenericImage::Gray8(from_buffer(buf)?),
        DynamicImage::ImageLuma16(buf) => GenericImage::Gray16(from_buffer(buf)?),
        DynamicImage::ImageRgb8(buf) => GenericImage::Color8(from_buffer(buf)?),
        DynamicImage::ImageRgb16(buf) => GenericImage::Color16(from_buffer(buf)?),
        img @ DynamicImage::ImageRgb32F(_) => GenericImage::Color16(from_buffer(img.into_rgb16())?),
        img if deep => GenericImage::ColorAlpha16(from_buffer(img.into_rgba16())?),
        img => GenericImage::ColorAlpha8(from_buffer(img.into_rgba8())?),
    })
}

fn from_buffer<P, const C: usize>(
    buf: ImageBuffer<P, Vec<P::Subpixel>>,
) -> Result<Image<P::Subpixel, C>, IoError>
where
    P: Pixel,
{
    let size = buf.dimensions().into();
    Ok(Image::new(size, buf.into_raw())?)
}

fn to_dynamic(image: &GenericImage, order: ChannelOrder) -> Result<DynamicImage, IoError> {
    let mut image = image.clone();
    if order == ChannelOrder::Bgr {
        image.swap_rb();
    }

    let size = image.size();
    let expected = size.area() * image.num_channels();
    let (w, h) = (size.width as u32, size.height as u32);

    let dynamic = match image {
        GenericImage::Gray8(img) => {
            ImageBuffer::<Luma<u8>, _>::from_raw(w, h, img.into_vec()).map(DynamicImage::ImageLuma8)
        }
        GenericImage::Gray16(img) => ImageBuffer::<Luma<u16>, _>::from_raw(w, h, img.into_vec())
            .map(DynamicImage::ImageLuma16),
        GenericImage::Color8(img) => {
            ImageBuffer::<Rgb<u8>, _>::from_raw(w, h, img.into_vec()).map(DynamicImage::ImageRgb8)
        }
        GenericImage::Color16(img) => ImageBuffer::<Rgb<u16>, _>::from_raw(w, h, img.into_vec())
            .map(DynamicImage::ImageRgb16),
        GenericImage::ColorAlpha8(img) => {
            ImageBuffer::<Rgba<u8>, _>::from_raw(w, h, img.into_vec()).map(DynamicImage::ImageRgba8)
        }
        GenericImage::ColorAlpha16(img) => {
            ImageBuffer::<Rgba<u16>, _>::from_raw(w, h, img.into_vec())
                .map(DynamicImage::ImageRgba16)
        }
    };

    dynamic.ok_or(IoError::ImageCreationError(ImageError::InvalidChannelShape(
        0, expected,
    )))
}
