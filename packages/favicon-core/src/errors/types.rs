use thiserror::Error;

/// favicon 生成の統合エラー型
#[derive(Debug, Error)]
pub enum FaviconError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("ico error: {0}")]
    Ico(#[from] IcoError),
}

/// 入力値の検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("size list is empty")]
    NoSizes,

    #[error("size must be 1-256, got {0}")]
    SizeOutOfRange(u32),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("no glyph for label {0:?}")]
    UnsupportedLabel(char),
}

/// ラスタライズ・PNG エンコードのエラー
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("size must be 1-256, got {0}")]
    InvalidSize(u32),

    #[error("no glyph for label {0:?}")]
    InvalidLabel(char),

    #[error("PNG encode failed: {0}")]
    EncodeFailed(String),
}

/// ICO コンテナの組み立て・読み取りエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IcoError {
    #[error("an icon needs at least one frame")]
    NoFrames,

    #[error("too many frames: {0}")]
    TooManyFrames(usize),

    #[error("frame size must be 1-256, got {0}")]
    InvalidFrameSize(u32),

    #[error("icon exceeds the 32-bit offset range ({0} bytes)")]
    TooLarge(usize),

    #[error("truncated icon: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("invalid header: reserved={reserved}, type={kind}")]
    InvalidHeader { reserved: u16, kind: u16 },

    #[error("frame {index} points outside the buffer (offset {offset}, size {size})")]
    PayloadOutOfBounds { index: usize, offset: u32, size: u32 },
}
