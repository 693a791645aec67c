use bytes::Bytes;

use favicon_core::{FAVICON_SIZES, FaviconError, SquareRenderer, build_favicon, validate_size};

/// /icon.png のサイズ
pub const ICON_SIZE: u32 = 32;

/// /apple-icon.png のサイズ
pub const APPLE_ICON_SIZE: u32 = 180;

/// 16/32/48px のフレームを持つ favicon.ico を生成する。
///
/// リクエストごとに毎回生成する（状態を持たない）。
pub fn favicon_ico<R: SquareRenderer + ?Sized>(renderer: &R) -> Result<Bytes, FaviconError> {
    let ico = build_favicon(renderer, &FAVICON_SIZES)?;
    Ok(Bytes::from(ico))
}

/// 単一サイズの PNG アイコンを生成する
pub fn icon_png<R: SquareRenderer + ?Sized>(
    renderer: &R,
    size: u32,
) -> Result<Bytes, FaviconError> {
    validate_size(size)?;
    let png = renderer.render_square_png(size)?;
    Ok(Bytes::from(png))
}
