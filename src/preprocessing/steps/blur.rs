use crate::error::OcrError;
use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;

/// Smooth the image with a Gaussian filter.
///
/// The filter is parameterized by an odd kernel size; the standard deviation
/// is derived from it with the same rule OpenCV uses when given a kernel but
/// no sigma. Kernel sizes below 3 leave the image untouched.
pub fn apply(image: GrayImage, kernel_size: u32) -> Result<GrayImage, OcrError> {
    if kernel_size < 3 {
        return Ok(image);
    }

    let sigma = sigma_for_kernel(kernel_size);
    Ok(gaussian_blur_f32(&image, sigma))
}

/// OpenCV's sigma-from-kernel-size rule.
fn sigma_for_kernel(kernel_size: u32) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn variance(img: &GrayImage) -> f64 {
        let pixels: Vec<f64> = img.pixels().map(|p| p.0[0] as f64).collect();
        let mean = pixels.iter().sum::<f64>() / pixels.len() as f64;
        pixels.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / pixels.len() as f64
    }

    #[test]
    fn test_blur_smooths_isolated_pixels() {
        let mut img = GrayImage::from_pixel(20, 20, Luma([255]));
        img.put_pixel(10, 10, Luma([0]));

        let blurred = apply(img.clone(), 5).unwrap();

        assert!(variance(&blurred) < variance(&img));
        assert!(blurred.get_pixel(10, 10).0[0] > 0);
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let img = GrayImage::new(31, 17);
        let blurred = apply(img, 9).unwrap();
        assert_eq!(blurred.dimensions(), (31, 17));
    }

    #[test]
    fn test_tiny_kernel_is_a_no_op() {
        let mut img = GrayImage::from_pixel(10, 10, Luma([200]));
        img.put_pixel(5, 5, Luma([0]));

        let result = apply(img.clone(), 1).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_sigma_grows_with_kernel_size() {
        assert!(sigma_for_kernel(5) < sigma_for_kernel(9));
        // 5x5 kernel: 0.3 * (2 - 1) + 0.8
        assert!((sigma_for_kernel(5) - 1.1).abs() < 1e-6);
        // 9x9 kernel: 0.3 * (4 - 1) + 0.8
        assert!((sigma_for_kernel(9) - 1.7).abs() < 1e-6);
    }
}
