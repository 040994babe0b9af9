//! AAC LC 码流语法层.
//!
//! 只做位级别的语法遍历, 不做任何反量化或频域到时域的变换:
//! 1. Huffman 解码树 (1 棵比例因子树 + 11 棵频谱树)
//! 2. 码本值解码 (符号位与 ESC 扩展的位消耗)
//! 3. raw_data_block 语法遍历, 输出每个语法元素的精确位区间

pub mod codebook;
pub mod huffman;
pub mod syntax;
mod tables;


pub use huffman::{AacCodebooks, HuffTree, codebooks};
pub use syntax::{ElementId, IcsInfo, RawElement, WindowSequence, scan_raw_data_block};
