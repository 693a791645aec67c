use crate::constants::MAX_ICO_DIMENSION;
use crate::errors::ValidationError;
use crate::raster::glyph::glyph_for;

/// 1 フレームのサイズを検証する
pub fn validate_size(size: u32) -> Result<(), ValidationError> {
    if size == 0 || size > MAX_ICO_DIMENSION {
        return Err(ValidationError::SizeOutOfRange(size));
    }
    Ok(())
}

/// フレームサイズ一覧を検証する
pub fn validate_sizes(sizes: &[u32]) -> Result<(), ValidationError> {
    if sizes.is_empty() {
        return Err(ValidationError::NoSizes);
    }
    sizes.iter().try_for_each(|&size| validate_size(size))
}

/// ラベルに対応するグリフがあるか検証する
pub fn validate_label(label: char) -> Result<(), ValidationError> {
    glyph_for(label)
        .map(|_| ())
        .ok_or(ValidationError::UnsupportedLabel(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sizes() {
        assert!(validate_sizes(&[16, 32, 48]).is_ok());
        assert!(validate_sizes(&[1, 256]).is_ok());
    }

    #[test]
    fn test_invalid_sizes() {
        assert_eq!(validate_sizes(&[]), Err(ValidationError::NoSizes));
        assert_eq!(
            validate_sizes(&[16, 0]),
            Err(ValidationError::SizeOutOfRange(0))
        );
        assert_eq!(
            validate_sizes(&[257]),
            Err(ValidationError::SizeOutOfRange(257))
        );
    }

    #[test]
    fn test_validate_label() {
        assert!(validate_label('K').is_ok());
        assert!(validate_label('k').is_ok());
        assert!(validate_label('4').is_ok());
        assert_eq!(
            validate_label('*'),
            Err(ValidationError::UnsupportedLabel('*'))
        );
    }
}
