use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::RgbImage;

use crate::error::FilterError;

/// Decode a base64 image payload into an RGB24 pixel buffer.
///
/// Accepts bare base64 or a `data:...;base64,` URI (everything through
/// the first comma is dropped). Whatever color layout the image carries
/// is converted to 3-channel RGB. No side effects.
pub fn decode_image(payload: &str) -> Result<RgbImage, FilterError> {
    let payload = match payload.find(',') {
        Some(pos) => &payload[pos + 1..],
        None => payload,
    };

    let bytes = STANDARD.decode(payload.trim())?;
    let decoded = image::load_from_memory(&bytes)?;
    Ok(decoded.into_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_base64(image: image::DynamicImage) -> String {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("encode png");
        STANDARD.encode(bytes)
    }

    #[test]
    fn malformed_base64_is_rejected() {
        let err = decode_image("this is !!! not base64").unwrap_err();
        assert!(matches!(err, FilterError::Base64(_)));
    }

    #[test]
    fn non_image_bytes_are_rejected() {
        let payload = STANDARD.encode([0u8, 1, 2, 3, 4, 5]);
        let err = decode_image(&payload).unwrap_err();
        assert!(matches!(err, FilterError::Image(_)));
    }

    #[test]
    fn rgb_png_round_trips() -> Result<(), FilterError> {
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([10u8, 20, 30]));
        let payload = png_base64(image::DynamicImage::ImageRgb8(img));

        let decoded = decode_image(&payload)?;
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0), &image::Rgb([10u8, 20, 30]));
        Ok(())
    }

    #[test]
    fn rgba_input_is_normalized_to_rgb() -> Result<(), FilterError> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([200u8, 100, 50, 255]));
        let payload = png_base64(image::DynamicImage::ImageRgba8(img));

        let decoded = decode_image(&payload)?;
        assert_eq!(decoded.get_pixel(1, 1), &image::Rgb([200u8, 100, 50]));
        Ok(())
    }

    #[test]
    fn data_uri_prefix_is_stripped() -> Result<(), FilterError> {
        let img = image::RgbImage::from_pixel(1, 1, image::Rgb([0u8, 0, 0]));
        let payload = format!(
            "data:image/png;base64,{}",
            png_base64(image::DynamicImage::ImageRgb8(img))
        );

        let decoded = decode_image(&payload)?;
        assert_eq!((decoded.width(), decoded.height()), (1, 1));
        Ok(())
    }
}
