//! 统一错误类型定义.
//!
//! 所有 dualmono crate 共用的错误类型, 支持跨模块传播.
//! 核心层错误 (Exhausted / Unsupported / Decode) 只作废当前访问单元,
//! 由调用方决定丢弃该单元继续, 还是向上传播.

use thiserror::Error;

/// dualmono 统一错误类型
#[derive(Debug, Error)]
pub enum DualMonoError {
    /// 比特数据不足 (码流被截断, 或短于声明的 frame_length)
    #[error("数据耗尽: 需要 {requested} 位, 剩余 {remaining} 位")]
    Exhausted { requested: usize, remaining: usize },

    /// 不支持的输入 (common_window=1, DRC/SBR 扩展载荷等)
    #[error("不支持的输入: {0}")]
    Unsupported(String),

    /// 码流解码错误 (Huffman 路径缺失, section 越界等)
    #[error("解码错误: {0}")]
    Decode(String),

    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 无效数据 (传输层损坏: TS 同步字节, PSI CRC, ADTS 同步字)
    #[error("无效数据: {0}")]
    InvalidData(String),

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// dualmono 统一 Result 类型
pub type DualMonoResult<T> = Result<T, DualMonoError>;

impl DualMonoError {
    /// 构造数据耗尽错误
    pub fn exhausted(requested: usize, remaining: usize) -> Self {
        Self::Exhausted {
            requested,
            remaining,
        }
    }
}
