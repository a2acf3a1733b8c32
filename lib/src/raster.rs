use crate::config::ResampleFilter;
use crate::dimensions::TargetSize;
use crate::error::{RenderError, Result};
use image::{RgbaImage, imageops};

/// Largest sampling buffer a render may allocate, in pixels (256 MiB of RGBA)
pub const MAX_TARGET_PIXELS: usize = 1 << 26;

/// Sampling buffer reused across render calls
///
/// Each render resizes the buffer to its target size and overwrites every
/// pixel. Renders running concurrently must each own a buffer.
#[derive(Debug, Default, Clone)]
pub struct PixelBuffer {
    image: Option<RgbaImage>,
}

impl PixelBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pixels written by the last successful resample
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    pub fn size(&self) -> Option<TargetSize> {
        self.image.as_ref().map(|img| TargetSize {
            width: img.width(),
            height: img.height(),
        })
    }
}

/// Downscale `source` into `buffer` at exactly `size`
///
/// On error the buffer keeps whatever it held before the call.
pub fn resample_into(
    source: &RgbaImage,
    size: TargetSize,
    filter: ResampleFilter,
    buffer: &mut PixelBuffer,
) -> Result<()> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::Rasterization(format!(
            "source image has no pixels ({}x{})",
            width, height
        )));
    }
    if size.width == 0 || size.height == 0 {
        return Err(RenderError::Rasterization(format!(
            "target canvas has no pixels ({}x{})",
            size.width, size.height
        )));
    }
    if size.pixel_count() > MAX_TARGET_PIXELS {
        return Err(RenderError::Rasterization(format!(
            "target canvas {}x{} exceeds the {} pixel limit",
            size.width, size.height, MAX_TARGET_PIXELS
        )));
    }

    let resampled = if (width, height) == (size.width, size.height) {
        source.clone()
    } else {
        imageops::resize(source, size.width, size.height, filter.into())
    };

    buffer.image = Some(resampled);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_resample_to_target_size() {
        let img = RgbaImage::from_pixel(100, 80, Rgba([10, 20, 30, 255]));
        let mut buffer = PixelBuffer::new();
        let size = TargetSize { width: 27, height: 40 };

        resample_into(&img, size, ResampleFilter::Triangle, &mut buffer).unwrap();

        assert_eq!(buffer.size(), Some(size));
    }

    #[test]
    fn test_same_size_copies_pixels() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        let mut buffer = PixelBuffer::new();

        resample_into(
            &img,
            TargetSize { width: 2, height: 1 },
            ResampleFilter::Lanczos3,
            &mut buffer,
        )
        .unwrap();

        assert_eq!(buffer.image(), Some(&img));
    }

    #[test]
    fn test_uniform_color_survives_downscale() {
        let img = RgbaImage::from_pixel(64, 64, Rgba([128, 128, 128, 255]));
        let mut buffer = PixelBuffer::new();

        resample_into(
            &img,
            TargetSize { width: 8, height: 8 },
            ResampleFilter::Triangle,
            &mut buffer,
        )
        .unwrap();

        for pixel in buffer.image().unwrap().pixels() {
            assert!((pixel[0] as i32 - 128).abs() <= 1);
        }
    }

    #[test]
    fn test_buffer_is_reused_and_resized() {
        let img = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 255]));
        let mut buffer = PixelBuffer::new();

        let first = TargetSize { width: 10, height: 10 };
        let second = TargetSize { width: 3, height: 7 };
        resample_into(&img, first, ResampleFilter::Nearest, &mut buffer).unwrap();
        resample_into(&img, second, ResampleFilter::Nearest, &mut buffer).unwrap();

        assert_eq!(buffer.size(), Some(second));
    }

    #[test]
    fn test_empty_source_fails_and_keeps_buffer() {
        let good = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let mut buffer = PixelBuffer::new();
        let size = TargetSize { width: 2, height: 2 };
        resample_into(&good, size, ResampleFilter::Triangle, &mut buffer).unwrap();

        let empty = RgbaImage::new(0, 0);
        let result = resample_into(&empty, size, ResampleFilter::Triangle, &mut buffer);

        assert!(matches!(result, Err(RenderError::Rasterization(_))));
        assert_eq!(buffer.size(), Some(size));
    }

    #[test]
    fn test_oversized_target_fails_and_keeps_buffer() {
        let img = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        let mut buffer = PixelBuffer::new();
        let small = TargetSize { width: 5, height: 5 };
        resample_into(&img, small, ResampleFilter::Triangle, &mut buffer).unwrap();

        let huge = TargetSize {
            width: u32::MAX,
            height: u32::MAX,
        };
        let result = resample_into(&img, huge, ResampleFilter::Triangle, &mut buffer);

        assert!(matches!(result, Err(RenderError::Rasterization(_))));
        assert_eq!(buffer.size(), Some(small));
    }

    #[test]
    fn test_zero_target_fails() {
        let img = RgbaImage::new(4, 4);
        let mut buffer = PixelBuffer::new();
        let result = resample_into(
            &img,
            TargetSize { width: 0, height: 3 },
            ResampleFilter::Triangle,
            &mut buffer,
        );
        assert!(result.is_err());
        assert!(buffer.image().is_none());
    }
}
