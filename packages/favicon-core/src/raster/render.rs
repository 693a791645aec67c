use crate::errors::RenderError;
use crate::raster::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH, GlyphBitmap, glyph_for, is_set};
use crate::validation::validate_size;
use image::{Rgba, RgbaImage};

/// アイコンの描画スタイル
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphStyle {
    pub label: char,
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
    /// 角丸半径（一辺に対する比率、0.0-0.5）
    pub corner_radius_ratio: f32,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            label: 'A',
            background: Rgba([0x0F, 0x17, 0x2A, 0xFF]),
            foreground: Rgba([0xF8, 0xFA, 0xFC, 0xFF]),
            corner_radius_ratio: 0.2,
        }
    }
}

/// 角丸の背景にラベルのグリフを中央配置した正方形画像を描画する
///
/// グリフは一辺の約 6 割に収まる整数倍で拡大する（最近傍）。
/// 7px 未満ではグリフを省略し背景のみ描画する。
pub fn render_glyph(size: u32, style: &GlyphStyle) -> Result<RgbaImage, RenderError> {
    validate_size(size).map_err(|_| RenderError::InvalidSize(size))?;
    let bitmap = glyph_for(style.label).ok_or(RenderError::InvalidLabel(style.label))?;

    let radius = size as f32 * style.corner_radius_ratio.clamp(0.0, 0.5);
    let mut img = RgbaImage::from_fn(size, size, |x, y| {
        if inside_rounded_square(x, y, size, radius) {
            style.background
        } else {
            Rgba([0, 0, 0, 0])
        }
    });

    draw_glyph(&mut img, bitmap, style.foreground);
    Ok(img)
}

fn inside_rounded_square(x: u32, y: u32, size: u32, radius: f32) -> bool {
    let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
    let (lo, hi) = (radius, size as f32 - radius);
    let dx = px - px.clamp(lo, hi);
    let dy = py - py.clamp(lo, hi);
    dx * dx + dy * dy <= radius * radius
}

fn draw_glyph(img: &mut RgbaImage, bitmap: &GlyphBitmap, color: Rgba<u8>) {
    let size = img.width();
    let scale = size * 3 / 5 / GLYPH_HEIGHT;
    if scale == 0 {
        return;
    }

    let (w, h) = (GLYPH_WIDTH * scale, GLYPH_HEIGHT * scale);
    let (x0, y0) = ((size - w) / 2, (size - h) / 2);
    for y in 0..h {
        for x in 0..w {
            if is_set(bitmap, x / scale, y / scale) {
                img.put_pixel(x0 + x, y0 + y, color);
            }
        }
    }
}
