use crate::constants::{ICO_BITS_PER_PIXEL, ICO_ENTRY_LEN, ICO_HEADER_LEN, MAX_ICO_DIMENSION};

/// 正方形の PNG フレーム
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFrame {
    pub size: u32,
    pub png_bytes: Vec<u8>,
}

impl ImageFrame {
    pub fn new(size: u32, png_bytes: Vec<u8>) -> Self {
        Self { size, png_bytes }
    }
}

/// ICO ファイルヘッダー（6 バイト）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoHeader {
    pub reserved: u16,
    pub kind: u16,
    pub count: u16,
}

impl IcoHeader {
    /// アイコン種別 (type=1)
    pub const ICON: u16 = 1;

    pub fn icon(count: u16) -> Self {
        Self {
            reserved: 0,
            kind: Self::ICON,
            count,
        }
    }

    pub fn to_bytes(&self) -> [u8; ICO_HEADER_LEN] {
        let mut buf = [0u8; ICO_HEADER_LEN];
        buf[0..2].copy_from_slice(&self.reserved.to_le_bytes());
        buf[2..4].copy_from_slice(&self.kind.to_le_bytes());
        buf[4..6].copy_from_slice(&self.count.to_le_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8; ICO_HEADER_LEN]) -> Self {
        Self {
            reserved: u16::from_le_bytes([buf[0], buf[1]]),
            kind: u16::from_le_bytes([buf[2], buf[3]]),
            count: u16::from_le_bytes([buf[4], buf[5]]),
        }
    }
}

/// ディレクトリエントリ（16 バイト）
///
/// 幅・高さは 1 バイトなので 256px は 0 として書き込む。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoDirectoryEntry {
    pub width: u8,
    pub height: u8,
    pub color_count: u8,
    pub reserved: u8,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    pub data_size: u32,
    pub data_offset: u32,
}

impl IcoDirectoryEntry {
    /// 32bpp PNG フレーム用のエントリを作成する
    pub fn for_png(size: u32, data_size: u32, data_offset: u32) -> Self {
        let dim = encode_dimension(size);
        Self {
            width: dim,
            height: dim,
            color_count: 0,
            reserved: 0,
            color_planes: 1,
            bits_per_pixel: ICO_BITS_PER_PIXEL,
            data_size,
            data_offset,
        }
    }

    /// 実際の幅（0 は 256 を意味する）
    pub fn dimension(&self) -> u32 {
        decode_dimension(self.width)
    }

    pub fn to_bytes(&self) -> [u8; ICO_ENTRY_LEN] {
        let mut buf = [0u8; ICO_ENTRY_LEN];
        buf[0] = self.width;
        buf[1] = self.height;
        buf[2] = self.color_count;
        buf[3] = self.reserved;
        buf[4..6].copy_from_slice(&self.color_planes.to_le_bytes());
        buf[6..8].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        buf[8..12].copy_from_slice(&self.data_size.to_le_bytes());
        buf[12..16].copy_from_slice(&self.data_offset.to_le_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8; ICO_ENTRY_LEN]) -> Self {
        Self {
            width: buf[0],
            height: buf[1],
            color_count: buf[2],
            reserved: buf[3],
            color_planes: u16::from_le_bytes([buf[4], buf[5]]),
            bits_per_pixel: u16::from_le_bytes([buf[6], buf[7]]),
            data_size: u32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
            data_offset: u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
        }
    }
}

fn encode_dimension(size: u32) -> u8 {
    if size >= MAX_ICO_DIMENSION { 0 } else { size as u8 }
}

fn decode_dimension(value: u8) -> u32 {
    if value == 0 { MAX_ICO_DIMENSION } else { value as u32 }
}
