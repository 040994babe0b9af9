//! 频谱码本值解码.
//!
//! 把 Huffman 解出的符号索引映射为四元组 (w, x, y, z) 或二元组 (y, z),
//! 并按码本属性消耗随后的符号位与 ESC 扩展位.

use dualmono_core::{BitCursor, DualMonoError, DualMonoResult};

use super::huffman::HuffTree;

/// ZERO_HCB: 该段频谱全为 0
pub const ZERO_HCB: u8 = 0;
/// ESC 码本
pub const ESC_HCB: u8 = 11;
/// ESC 码本中触发扩展的幅度值
pub const ESC_FLAG: i32 = 16;

/// ESC 前缀 1 的最大个数 (码字长度 = 前缀 + 4 不超过 15 位)
const ESC_MAX_PREFIX: u32 = 11;

/// 码本分组方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 每个符号 4 个系数
    Quad,
    /// 每个符号 2 个系数
    Pair,
}

impl Grouping {
    /// 每个符号携带的系数个数
    pub fn dimension(self) -> usize {
        match self {
            Self::Quad => 4,
            Self::Pair => 2,
        }
    }
}

/// 频谱码本属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodebookInfo {
    /// 码本编号 (1-11)
    pub number: u8,
    /// 分组方式
    pub grouping: Grouping,
    /// 值是否自带符号
    pub signed: bool,
    /// 最大绝对值 (LAV)
    pub lav: u32,
}

#[rustfmt::skip]
const CODEBOOK_INFO: [CodebookInfo; 11] = [
    CodebookInfo { number: 1,  grouping: Grouping::Quad, signed: true,  lav: 1 },
    CodebookInfo { number: 2,  grouping: Grouping::Quad, signed: true,  lav: 1 },
    CodebookInfo { number: 3,  grouping: Grouping::Quad, signed: false, lav: 2 },
    CodebookInfo { number: 4,  grouping: Grouping::Quad, signed: false, lav: 2 },
    CodebookInfo { number: 5,  grouping: Grouping::Pair, signed: true,  lav: 4 },
    CodebookInfo { number: 6,  grouping: Grouping::Pair, signed: true,  lav: 4 },
    CodebookInfo { number: 7,  grouping: Grouping::Pair, signed: false, lav: 7 },
    CodebookInfo { number: 8,  grouping: Grouping::Pair, signed: false, lav: 7 },
    CodebookInfo { number: 9,  grouping: Grouping::Pair, signed: false, lav: 12 },
    CodebookInfo { number: 10, grouping: Grouping::Pair, signed: false, lav: 12 },
    CodebookInfo { number: 11, grouping: Grouping::Pair, signed: false, lav: 16 },
];

impl CodebookInfo {
    /// 查询频谱码本 `cb` 的属性, 非 1-11 返回 None
    pub fn lookup(cb: u8) -> Option<&'static CodebookInfo> {
        match cb {
            1..=11 => Some(&CODEBOOK_INFO[usize::from(cb - 1)]),
            _ => None,
        }
    }

    /// 位置进制的基数
    fn modulus(&self) -> u32 {
        if self.signed {
            2 * self.lav + 1
        } else {
            self.lav + 1
        }
    }

    /// 有符号码本的中心偏移
    fn offset(&self) -> i32 {
        if self.signed { self.lav as i32 } else { 0 }
    }

    /// 是否为 ESC 码本
    pub fn is_escape(&self) -> bool {
        self.number == ESC_HCB
    }

    /// 把符号索引分解为系数, 高位分量在前
    ///
    /// 返回数组的前 `grouping.dimension()` 个元素有效.
    pub fn unpack(&self, index: u16) -> [i32; 4] {
        let modulus = self.modulus();
        let offset = self.offset();
        let dim = self.grouping.dimension();

        let mut values = [0i32; 4];
        let mut rest = u32::from(index);
        for slot in values[..dim].iter_mut().rev() {
            *slot = (rest % modulus) as i32 - offset;
            rest /= modulus;
        }
        values
    }
}

/// 一个 Huffman 符号解出的系数组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectralGroup {
    /// 系数值 (已应用符号位与 ESC 扩展)
    pub values: [i32; 4],
    /// 有效系数个数 (4 或 2)
    pub len: usize,
}

impl SpectralGroup {
    /// 有效系数切片
    pub fn as_slice(&self) -> &[i32] {
        &self.values[..self.len]
    }
}

/// 读取一组频谱系数: Huffman 符号, 随后的符号位, 以及 ESC 扩展
///
/// 无符号码本中每个非零幅度后跟 1 个符号位; 全部符号位读完之后,
/// 码本 11 中幅度恰为 16 的分量依次读取各自的 ESC 序列.
pub fn read_spectral_group(
    bc: &mut BitCursor,
    info: &CodebookInfo,
    tree: &HuffTree,
) -> DualMonoResult<SpectralGroup> {
    let index = tree.decode(bc)?;
    let mut values = info.unpack(index);
    let len = info.grouping.dimension();

    if !info.signed {
        for v in values[..len].iter_mut().filter(|v| **v != 0) {
            if bc.read_bool()? {
                *v = -*v;
            }
        }
    }

    if info.is_escape() {
        for v in values[..len].iter_mut() {
            if v.abs() == ESC_FLAG {
                let magnitude = read_escape(bc)?;
                *v = if *v < 0 { -magnitude } else { magnitude };
            }
        }
    }

    Ok(SpectralGroup { values, len })
}

/// 读取 ESC 序列, 返回扩展后的幅度
///
/// 前缀为连续的 1, 以 0 结束, 前缀长度为 N 时随后读取 N + 4 位,
/// 幅度 = 2^(N+4) + escape_word.
pub fn read_escape(bc: &mut BitCursor) -> DualMonoResult<i32> {
    let mut prefix = 0u32;
    while bc.read_bool()? {
        prefix += 1;
        if prefix > ESC_MAX_PREFIX {
            return Err(DualMonoError::Decode(format!(
                "AAC: ESC 前缀超过 {} 位",
                ESC_MAX_PREFIX
            )));
        }
    }
    let width = prefix + 4;
    let word = bc.read_bits(width)?;
    Ok((1i32 << width) + word as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aac::huffman::codebooks;
    use dualmono_core::BitWriter;

    #[test]
    fn test_四元组有符号分解() {
        let cb1 = CodebookInfo::lookup(1).unwrap();
        // 索引 0 -> (-1,-1,-1,-1), 40 -> (0,0,0,0), 80 -> (1,1,1,1)
        assert_eq!(cb1.unpack(0), [-1, -1, -1, -1]);
        assert_eq!(cb1.unpack(40), [0, 0, 0, 0]);
        assert_eq!(cb1.unpack(80), [1, 1, 1, 1]);
        // 3^3*2 + 3^2*0 + 3*1 + 2 = 59 -> (1,-1,0,1)
        assert_eq!(cb1.unpack(59), [1, -1, 0, 1]);
    }

    #[test]
    fn test_四元组无符号分解() {
        let cb3 = CodebookInfo::lookup(3).unwrap();
        // 27*2 + 9*1 + 3*0 + 2 = 65
        assert_eq!(cb3.unpack(65), [2, 1, 0, 2]);
    }

    #[test]
    fn test_二元组分解() {
        let cb5 = CodebookInfo::lookup(5).unwrap();
        assert_eq!(&cb5.unpack(40)[..2], &[0, 0]);
        assert_eq!(&cb5.unpack(0)[..2], &[-4, -4]);
        let cb11 = CodebookInfo::lookup(11).unwrap();
        assert_eq!(&cb11.unpack(288)[..2], &[16, 16]);
        assert_eq!(&cb11.unpack(17 * 3 + 16)[..2], &[3, 16]);
        assert!(cb11.is_escape());
        assert!(CodebookInfo::lookup(12).is_none());
        assert!(CodebookInfo::lookup(ZERO_HCB).is_none());
    }

    #[test]
    fn test_符号位先于_esc() {
        let info = CodebookInfo::lookup(11).unwrap();
        let tree = codebooks().spectral(11).unwrap();
        let (code, len) = crate::aac::tables::SPECTRUM_CODES_11[17 * 16 + 16];

        let mut bw = BitWriter::new();
        bw.write_bits(u32::from(code), u32::from(len));
        bw.write_bit(1); // y 符号: 负
        bw.write_bit(0); // z 符号: 正
        // y 的 ESC: 前缀 "10", 读 5 位 = 3 -> 2^5 + 3 = 35
        bw.write_bits(0b10, 2);
        bw.write_bits(3, 5);
        // z 的 ESC: 前缀 "0", 读 4 位 = 0 -> 16
        bw.write_bit(0);
        bw.write_bits(0, 4);
        let total = bw.bits_written();
        let data = bw.finish();

        let mut bc = BitCursor::new(&data);
        let group = read_spectral_group(&mut bc, info, tree).unwrap();
        assert_eq!(group.as_slice(), &[-35, 16]);
        assert_eq!(bc.position(), total);
    }

    #[test]
    fn test_有符号码本不读符号位() {
        let info = CodebookInfo::lookup(1).unwrap();
        let tree = codebooks().spectral(1).unwrap();
        let (code, len) = crate::aac::tables::SPECTRUM_CODES_1[80];

        let mut bw = BitWriter::new();
        bw.write_bits(u32::from(code), u32::from(len));
        let total = bw.bits_written();
        let data = bw.finish();

        let mut bc = BitCursor::new(&data);
        let group = read_spectral_group(&mut bc, info, tree).unwrap();
        assert_eq!(group.as_slice(), &[1, 1, 1, 1]);
        assert_eq!(bc.position(), total);
    }

    #[test]
    fn test_无符号码本零值不读符号位() {
        let info = CodebookInfo::lookup(7).unwrap();
        let tree = codebooks().spectral(7).unwrap();
        // (0, 5): 只有 z 非零
        let (code, len) = crate::aac::tables::SPECTRUM_CODES_7[5];

        let mut bw = BitWriter::new();
        bw.write_bits(u32::from(code), u32::from(len));
        bw.write_bit(1);
        let total = bw.bits_written();
        let data = bw.finish();

        let mut bc = BitCursor::new(&data);
        let group = read_spectral_group(&mut bc, info, tree).unwrap();
        assert_eq!(group.as_slice(), &[0, -5]);
        assert_eq!(bc.position(), total);
    }

    #[test]
    fn test_esc_前缀过长() {
        let data = [0xFF, 0xFF];
        let mut bc = BitCursor::new(&data);
        assert!(matches!(read_escape(&mut bc), Err(DualMonoError::Decode(_))));
    }
}
