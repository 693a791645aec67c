use crate::constants::{ICO_ENTRY_LEN, ICO_HEADER_LEN};
use crate::errors::IcoError;
use crate::ico::entry::{IcoDirectoryEntry, IcoHeader};

fn check_len(buf: &[u8], needed: usize) -> Result<(), IcoError> {
    if buf.len() < needed {
        return Err(IcoError::Truncated {
            needed,
            actual: buf.len(),
        });
    }
    Ok(())
}

/// ICO ファイルのヘッダーとディレクトリを読み取る
pub fn read_directory(buf: &[u8]) -> Result<Vec<IcoDirectoryEntry>, IcoError> {
    check_len(buf, ICO_HEADER_LEN)?;
    let mut header_bytes = [0u8; ICO_HEADER_LEN];
    header_bytes.copy_from_slice(&buf[..ICO_HEADER_LEN]);
    let header = IcoHeader::from_bytes(&header_bytes);

    if header.reserved != 0 || header.kind != IcoHeader::ICON {
        return Err(IcoError::InvalidHeader {
            reserved: header.reserved,
            kind: header.kind,
        });
    }

    let count = header.count as usize;
    check_len(buf, ICO_HEADER_LEN + ICO_ENTRY_LEN * count)?;

    let entries = buf[ICO_HEADER_LEN..ICO_HEADER_LEN + ICO_ENTRY_LEN * count]
        .chunks_exact(ICO_ENTRY_LEN)
        .map(|chunk| {
            let mut entry = [0u8; ICO_ENTRY_LEN];
            entry.copy_from_slice(chunk);
            IcoDirectoryEntry::from_bytes(&entry)
        })
        .collect();

    Ok(entries)
}

/// 各エントリのオフセット・サイズで PNG ペイロードを切り出す
pub fn frame_payloads(buf: &[u8]) -> Result<Vec<&[u8]>, IcoError> {
    read_directory(buf)?
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let start = entry.data_offset as usize;
            start
                .checked_add(entry.data_size as usize)
                .and_then(|end| buf.get(start..end))
                .ok_or(IcoError::PayloadOutOfBounds {
                    index,
                    offset: entry.data_offset,
                    size: entry.data_size,
                })
        })
        .collect()
}
