/// favicon.ico に含めるフレームサイズ（px）
pub const FAVICON_SIZES: [u32; 3] = [16, 32, 48];

/// ICO ディレクトリで表現できる最大寸法（0 として書き込まれる）
pub const MAX_ICO_DIMENSION: u32 = 256;

/// ICO ヘッダーのバイト数
pub const ICO_HEADER_LEN: usize = 6;

/// ディレクトリエントリ1件のバイト数
pub const ICO_ENTRY_LEN: usize = 16;

/// フレームのビット深度（PNG 埋め込みは常に 32bpp RGBA）
pub const ICO_BITS_PER_PIXEL: u16 = 32;
