use crate::errors::RenderError;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// RGBA 画像を PNG にエンコードする
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());

    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| RenderError::EncodeFailed(e.to_string()))?;

    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png() {
        let img = RgbaImage::new(10, 10);
        let result = encode_png(&img);

        assert!(result.is_ok());
        let data = result.unwrap();
        // PNG マジックナンバー確認
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encoded_png_decodes() {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([1, 2, 3, 4]));
        let data = encode_png(&img).unwrap();

        let decoded = image::load_from_memory_with_format(&data, ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded, img);
    }
}
