use crate::constants::{ICO_ENTRY_LEN, ICO_HEADER_LEN, MAX_ICO_DIMENSION};
use crate::errors::IcoError;
use crate::ico::entry::{IcoDirectoryEntry, IcoHeader, ImageFrame};

/// PNG フレーム列から ICO ファイルを組み立てる
///
/// ヘッダー → ディレクトリエントリ → PNG ペイロードの順に、入力順のまま
/// パディングなしで連結する。各エントリのオフセットは出力バッファ先頭からの絶対位置。
pub fn build_ico(frames: &[ImageFrame]) -> Result<Vec<u8>, IcoError> {
    if frames.is_empty() {
        return Err(IcoError::NoFrames);
    }
    let count = u16::try_from(frames.len()).map_err(|_| IcoError::TooManyFrames(frames.len()))?;

    if let Some(frame) = frames
        .iter()
        .find(|f| f.size == 0 || f.size > MAX_ICO_DIMENSION)
    {
        return Err(IcoError::InvalidFrameSize(frame.size));
    }

    let directory_len = ICO_HEADER_LEN + ICO_ENTRY_LEN * frames.len();
    let payload_len: usize = frames.iter().map(|f| f.png_bytes.len()).sum();
    let total_len = directory_len + payload_len;
    if u32::try_from(total_len).is_err() {
        return Err(IcoError::TooLarge(total_len));
    }

    let mut buf = Vec::with_capacity(total_len);
    buf.extend_from_slice(&IcoHeader::icon(count).to_bytes());

    // total_len が u32 に収まるので個々のサイズ・オフセットも収まる
    let mut offset = directory_len as u32;
    for frame in frames {
        let size = frame.png_bytes.len() as u32;
        let entry = IcoDirectoryEntry::for_png(frame.size, size, offset);
        buf.extend_from_slice(&entry.to_bytes());
        offset += size;
    }

    for frame in frames {
        buf.extend_from_slice(&frame.png_bytes);
    }

    debug_assert_eq!(buf.len(), total_len);
    Ok(buf)
}
