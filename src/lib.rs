//! # dualmono
//!
//! 纯 Rust 实现的 AAC 双单声道 (dual mono) 转封装工具集.
//!
//! 日本 ISDB 广播的双语节目常以 channel_configuration=0 的 ADTS 帧携带两个
//! 独立的单声道 (主声道 / 副声道). 本库在不解码音频的前提下遍历 AAC 语法,
//! 按位区间重新组帧:
//! - **单声道模式**: 两个 SCE 各自输出为 channel_configuration=1 的帧
//! - **立体声模式**: 主声道复制为 common_window=0 的 CPE
//!
//! # 快速开始
//!
//! ```rust
//! use dualmono::codec::{AdtsHeader, TransmuxMode, transmux};
//! use dualmono::format::split_adts;
//!
//! let stream = AdtsHeader::default().build_frame(1, &[0x00, 0x00]).unwrap();
//! for au in split_adts(&stream) {
//!     let out = transmux(au.unwrap(), TransmuxMode::Mono).unwrap();
//!     assert!(out.passthrough);
//! }
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `dualmono-core` | 错误类型, 比特游标, 比特写入器, CRC |
//! | `dualmono-codec` | AAC 语法遍历, ADTS 头部, 转封装 |
//! | `dualmono-format` | MPEG-TS PES 提取, ADTS 切分, 格式探测 |

/// 核心类型与工具
pub use dualmono_core as core;

/// AAC 码流层
pub use dualmono_codec as codec;

/// 传输层
pub use dualmono_format as format;

pub use dualmono_codec::{TransmuxMode, TransmuxOutput, transmux};
pub use dualmono_core::{DualMonoError, DualMonoResult};

/// 库版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
