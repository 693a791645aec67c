use crate::errors::ValidationError;
use image::Rgba;

/// `#rgb` / `#rrggbb` / `#rrggbbaa` 形式の色を解析する
pub fn parse_hex_color(value: &str) -> Result<Rgba<u8>, ValidationError> {
    let invalid = || ValidationError::InvalidColor(value.to_string());

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        3 => {
            let mut rgba = [0xFF; 4];
            for (i, c) in hex.chars().enumerate() {
                // 1 桁は 2 桁に展開（#abc → #aabbcc）
                rgba[i] = channel(&c.to_string())? * 0x11;
            }
            Ok(Rgba(rgba))
        }
        6 | 8 => {
            let mut rgba = [0xFF; 4];
            for i in 0..hex.len() / 2 {
                rgba[i] = channel(&hex[i * 2..i * 2 + 2])?;
            }
            Ok(Rgba(rgba))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#0f172a"), Ok(Rgba([0x0F, 0x17, 0x2A, 0xFF])));
        assert_eq!(parse_hex_color("#FFF"), Ok(Rgba([0xFF, 0xFF, 0xFF, 0xFF])));
        assert_eq!(parse_hex_color("#a1b"), Ok(Rgba([0xAA, 0x11, 0xBB, 0xFF])));
        assert_eq!(parse_hex_color(" #11223380 "), Ok(Rgba([0x11, 0x22, 0x33, 0x80])));
    }

    #[test]
    fn test_invalid_colors() {
        for value in ["", "0f172a", "#12", "#12345", "#gggggg", "#+1+2+3"] {
            assert_eq!(
                parse_hex_color(value),
                Err(ValidationError::InvalidColor(value.to_string())),
                "{value}"
            );
        }
    }
}
