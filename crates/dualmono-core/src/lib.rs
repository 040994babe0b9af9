//! # dualmono-core
//!
//! dualmono 核心库, 提供错误类型、比特游标、比特写入器和 CRC 工具函数.
//!
//! 其余 crate (codec, format, cli) 都建立在本 crate 之上.

pub mod bitreader;
pub mod bitwriter;
pub mod crc;
pub mod error;

// 重导出常用类型
pub use bitreader::{BitCursor, BitSpan};
pub use bitwriter::BitWriter;
pub use error::{DualMonoError, DualMonoResult};
