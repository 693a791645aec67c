pub mod encode;
pub mod glyph;
pub mod render;

pub use encode::encode_png;
pub use render::{GlyphStyle, render_glyph};

use crate::errors::{FaviconError, RenderError};
use crate::ico::{ImageFrame, build_ico};
use crate::validation::validate_sizes;

/// 指定サイズの正方形 PNG を生成する
pub trait SquareRenderer {
    fn render_square_png(&self, size: u32) -> Result<Vec<u8>, RenderError>;
}

/// ラベルのグリフを描画するレンダラー
#[derive(Debug, Clone, Default)]
pub struct GlyphRenderer {
    style: GlyphStyle,
}

impl GlyphRenderer {
    pub fn new(style: GlyphStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &GlyphStyle {
        &self.style
    }
}

impl SquareRenderer for GlyphRenderer {
    fn render_square_png(&self, size: u32) -> Result<Vec<u8>, RenderError> {
        let img = render_glyph(size, &self.style)?;
        encode_png(&img)
    }
}

/// 各サイズを順にラスタライズして ICO を組み立てる
///
/// 1 フレームでも失敗したら全体を失敗とし、部分的な ICO は返さない。
pub fn build_favicon<R: SquareRenderer + ?Sized>(
    renderer: &R,
    sizes: &[u32],
) -> Result<Vec<u8>, FaviconError> {
    validate_sizes(sizes)?;

    let frames = sizes
        .iter()
        .map(|&size| -> Result<ImageFrame, RenderError> {
            let png_bytes = renderer.render_square_png(size)?;
            tracing::debug!(size, bytes = png_bytes.len(), "frame rendered");
            Ok(ImageFrame::new(size, png_bytes))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(build_ico(&frames)?)
}
