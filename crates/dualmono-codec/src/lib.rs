//! # dualmono-codec
//!
//! 双单声道 AAC 转封装的码流层.
//!
//! - [`aac`]: Huffman 解码树, 码本值解码, raw_data_block 语法遍历
//! - [`adts`]: ADTS 帧头部解析与生成
//! - [`transmux`]: 按语法元素位区间重新组帧 (单声道拆分 / 立体声复制)
//!
//! ## 使用示例
//!
//! ```rust
//! use dualmono_codec::{AdtsHeader, TransmuxMode, transmux};
//!
//! // channel_configuration != 0 的帧原样直通
//! let au = AdtsHeader::default().build_frame(2, &[0xE0]).unwrap();
//! let out = transmux(&au, TransmuxMode::Mono).unwrap();
//! assert!(out.passthrough);
//! assert_eq!(out.primary.as_deref(), Some(au.as_slice()));
//! ```

pub mod aac;
pub mod adts;
pub mod transmux;

// 重导出常用类型
pub use aac::{ElementId, RawElement, scan_raw_data_block};
pub use adts::AdtsHeader;
pub use transmux::{TransmuxMode, TransmuxOutput, transmux, transmux_mono, transmux_stereo};
