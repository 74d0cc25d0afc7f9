use crate::{error::ImageError, image::Image, image::ImageSize};

/// Storage type of a single sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleType {
    /// 8-bit unsigned samples.
    U8,
    /// 16-bit unsigned samples.
    U16,
}

/// A decoded image of any of the layouts the codecs produce.
///
/// Color variants hold three samples per pixel in the channel order the
/// image was decoded with; alpha variants add a fourth, trailing sample.
#[derive(Clone, Debug, PartialEq)]
pub enum GenericImage {
    /// 8-bit grayscale image
    Gray8(Image<u8, 1>),
    /// 16-bit grayscale image
    Gray16(Image<u16, 1>),
    /// 8-bit three channel color image
    Color8(Image<u8, 3>),
    /// 16-bit three channel color image
    Color16(Image<u16, 3>),
    /// 8-bit color image with alpha channel
    ColorAlpha8(Image<u8, 4>),
    /// 16-bit color image with alpha channel
    ColorAlpha16(Image<u16, 4>),
}

impl GenericImage {
    /// Build an 8-bit image from interleaved samples with a runtime channel count.
    ///
    /// Two channel (gray + alpha) data is not representable and is rejected.
    pub fn from_u8(size: ImageSize, channels: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        Ok(match channels {
            1 => GenericImage::Gray8(Image::new(size, data)?),
            3 => GenericImage::Color8(Image::new(size, data)?),
            4 => GenericImage::ColorAlpha8(Image::new(size, data)?),
            n => return Err(ImageError::UnsupportedChannels(n)),
        })
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::Gray8(img) => img.size(),
            GenericImage::Gray16(img) => img.size(),
            GenericImage::Color8(img) => img.size(),
            GenericImage::Color16(img) => img.size(),
            GenericImage::ColorAlpha8(img) => img.size(),
            GenericImage::ColorAlpha16(img) => img.size(),
        }
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        match self {
            GenericImage::Gray8(_) | GenericImage::Gray16(_) => 1,
            GenericImage::Color8(_) | GenericImage::Color16(_) => 3,
            GenericImage::ColorAlpha8(_) | GenericImage::ColorAlpha16(_) => 4,
        }
    }

    /// The sample storage type.
    pub fn dtype(&self) -> SampleType {
        match self {
            GenericImage::Gray8(_) | GenericImage::Color8(_) | GenericImage::ColorAlpha8(_) => {
                SampleType::U8
            }
            _ => SampleType::U16,
        }
    }

    /// The shape of the buffer as `[height, width, channels]`.
    pub fn shape(&self) -> [usize; 3] {
        let size = self.size();
        [size.height, size.width, self.num_channels()]
    }

    /// Reverse the first three channels of every pixel (RGB <-> BGR).
    pub fn swap_rb(&mut self) {
        match self {
            GenericImage::Color8(img) => img.swap_rb(),
            GenericImage::Color16(img) => img.swap_rb(),
            GenericImage::ColorAlpha8(img) => img.swap_rb(),
            GenericImage::ColorAlpha16(img) => img.swap_rb(),
            GenericImage::Gray8(_) | GenericImage::Gray16(_) => {}
        }
    }
}

macro_rules! impl_from_image {
    ($t:ty, $c:literal, $variant:ident) => {
        impl From<Image<$t, $c>> for GenericImage {
            fn from(image: Image<$t, $c>) -> Self {
                GenericImage::$variant(image)
            }
        }
    };
}

impl_from_image!(u8, 1, Gray8);
impl_from_image!(u16, 1, Gray16);
impl_from_image!(u8, 3, Color8);
impl_from_image!(u16, 3, Color16);
impl_from_image!(u8, 4, ColorAlpha8);
impl_from_image!(u16, 4, ColorAlpha16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_from_u8() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 4,
            height: 2,
        };

        let gray = GenericImage::from_u8(size, 1, vec![0; 8])?;
        assert_eq!(gray.shape(), [2, 4, 1]);
        assert_eq!(gray.dtype(), SampleType::U8);

        let rgba = GenericImage::from_u8(size, 4, vec![0; 32])?;
        assert!(matches!(rgba, GenericImage::ColorAlpha8(_)));

        assert_eq!(
            GenericImage::from_u8(size, 2, vec![0; 16]),
            Err(ImageError::UnsupportedChannels(2))
        );
        assert_eq!(
            GenericImage::from_u8(size, 3, vec![0; 8]),
            Err(ImageError::InvalidChannelShape(8, 24))
        );

        Ok(())
    }

    #[test]
    fn generic_from_typed() -> Result<(), ImageError> {
        let image: GenericImage = Image::<u16, 3>::from_size_val([5, 3].into(), 1000)?.into();
        assert_eq!(image.size().width, 5);
        assert_eq!(image.num_channels(), 3);
        assert_eq!(image.dtype(), SampleType::U16);
        Ok(())
    }

    #[test]
    fn generic_swap_rb() -> Result<(), ImageError> {
        let mut image: GenericImage = Image::<u8, 3>::new([1, 1].into(), vec![10, 20, 30])?.into();
        image.swap_rb();
        match image {
            GenericImage::Color8(img) => assert_eq!(img.as_slice(), &[30, 20, 10]),
            other => panic!("unexpected variant: {other:?}"),
        }
        Ok(())
    }
}
