//! # dualmono-format
//!
//! 双单声道转封装的传输层.
//!
//! - [`mpegts`]: 从 MPEG-TS 中按 PAT/PMT 找到 ADTS AAC 基本流并重组 PES
//! - [`adts`]: 把字节流切分为单个 ADTS 访问单元
//! - [`probe`]: 输入格式探测

pub mod adts;
pub mod mpegts;
pub mod probe;

// 重导出常用类型
pub use adts::{AdtsSplitter, split_adts};
pub use mpegts::{PesPacket, TsPesExtractor};
pub use probe::{ContainerKind, probe};
