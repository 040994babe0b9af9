//! 输入格式探测.
//!
//! 先按内容判断 (TS 同步字节 / ADTS 同步字), 再按扩展名回退.

use std::fmt;
use std::path::Path;

use dualmono_codec::adts::AdtsHeader;
use log::debug;

use crate::adts::{id3v2_len, is_adts_sync};
use crate::mpegts::probe_ts;

/// 输入容器类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// MPEG-2 传输流
    MpegTs,
    /// 裸 ADTS 流
    Adts,
}

impl ContainerKind {
    /// 类型名称
    pub fn name(self) -> &'static str {
        match self {
            Self::MpegTs => "mpegts",
            Self::Adts => "adts",
        }
    }

    /// 按扩展名判断
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ts" | "m2ts" | "mts" => Some(Self::MpegTs),
            "aac" | "adts" => Some(Self::Adts),
            _ => None,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 探测数据的容器类型
///
/// `data` 为文件开头的若干字节, `path` 用于扩展名回退.
pub fn probe(data: &[u8], path: Option<&Path>) -> Option<ContainerKind> {
    if probe_ts(data) {
        debug!("探测: 找到相隔 188 字节的 TS 同步字节");
        return Some(ContainerKind::MpegTs);
    }

    let offset = id3v2_len(data);
    if let Some(rest) = data.get(offset..)
        && is_adts_sync(rest)
        && let Ok(header) = AdtsHeader::parse(rest)
        && usize::from(header.frame_length) >= header.header_len()
    {
        debug!("探测: 偏移 {} 处找到 ADTS 同步字", offset);
        return Some(ContainerKind::Adts);
    }

    path.and_then(ContainerKind::from_extension)
}
