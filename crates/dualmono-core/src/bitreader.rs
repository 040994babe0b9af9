//! 比特游标.
//!
//! 在字节缓冲区上按位顺序读取 (MSB first), 只进不退.
//!
//! 游标额外维护一个检查点 (mark): 自上次检查点以来消耗的位区间可以通过
//! [`BitCursor::take_consumed`] 取出为 [`BitSpan`], 再原样拷贝到新的输出帧中.
//! 这样转封装时无需重新推算字节偏移, 也不会像累积缓冲区那样无限增长.

use crate::{BitWriter, DualMonoError, DualMonoResult};

/// 位区间
///
/// 描述游标底层数据中 `[start, start + len)` 的一段位, 单位为 bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitSpan {
    /// 起始位位置
    pub start: usize,
    /// 位长度
    pub len: usize,
}

impl BitSpan {
    /// 创建位区间
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// 结束位位置 (不含)
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// 是否为空区间
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 将区间内的位打包为字节序列, 末尾以 0 补齐到字节边界
    pub fn to_bytes(&self, data: &[u8]) -> Vec<u8> {
        let mut bw = BitWriter::with_capacity(self.len.div_ceil(8));
        bw.write_bit_span(data, self.start, self.len);
        bw.finish()
    }
}

/// 比特游标
///
/// # 示例
/// ```
/// use dualmono_core::bitreader::BitCursor;
///
/// let data = [0b1011_0001, 0b0101_0101];
/// let mut bc = BitCursor::new(&data);
/// assert_eq!(bc.read_bits(4).unwrap(), 0b1011);
/// assert_eq!(bc.read_bits(4).unwrap(), 0b0001);
/// let span = bc.take_consumed();
/// assert_eq!((span.start, span.len), (0, 8));
/// assert_eq!(bc.read_bits(8).unwrap(), 0b0101_0101);
/// assert!(bc.is_empty());
/// ```
pub struct BitCursor<'a> {
    /// 源数据
    data: &'a [u8],
    /// 当前位位置
    pos: usize,
    /// 检查点位位置
    mark: usize,
}

impl<'a> BitCursor<'a> {
    /// 创建新的比特游标
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            mark: 0,
        }
    }

    /// 当前位位置 (自数据起点)
    pub fn position(&self) -> usize {
        self.pos
    }

    /// 剩余可读位数
    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// 是否已无剩余位
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// 读取 N 个位 (最多 32 位)
    ///
    /// 按大端位序读取, 返回值的低 N 位有效. 剩余位数不足时返回
    /// [`DualMonoError::Exhausted`], 不会以 0 填充.
    pub fn read_bits(&mut self, n: u32) -> DualMonoResult<u32> {
        if n == 0 {
            return Ok(0);
        }
        if n > 32 {
            return Err(DualMonoError::InvalidArgument(format!(
                "read_bits: n={} 超过 32 位",
                n,
            )));
        }
        let wanted = n as usize;
        if wanted > self.remaining() {
            return Err(DualMonoError::exhausted(wanted, self.remaining()));
        }

        let mut result: u32 = 0;
        let mut left = n;
        while left > 0 {
            let bit_pos = (self.pos % 8) as u32;
            let available = 8 - bit_pos;
            let to_read = left.min(available);

            let shift = available - to_read;
            let mask = ((1u32 << to_read) - 1) as u8;
            let bits = (self.data[self.pos / 8] >> shift) & mask;

            result = (result << to_read) | u32::from(bits);
            self.pos += to_read as usize;
            left -= to_read;
        }

        Ok(result)
    }

    /// 读取 1 个位并转换为布尔值
    pub fn read_bool(&mut self) -> DualMonoResult<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// 跳过 N 个位 (可超过 32 位)
    pub fn skip_bits(&mut self, n: usize) -> DualMonoResult<()> {
        if n > self.remaining() {
            return Err(DualMonoError::exhausted(n, self.remaining()));
        }
        self.pos += n;
        Ok(())
    }

    /// 消耗到下一个字节边界为止的位, 并返回这些位的值
    ///
    /// 字节边界以游标数据起点计算. 已对齐时不消耗任何位.
    pub fn byte_align(&mut self) -> DualMonoResult<u32> {
        let pad = (8 - self.pos % 8) % 8;
        self.read_bits(pad as u32)
    }

    /// 在当前位置设置检查点
    pub fn mark(&mut self) {
        self.mark = self.pos;
    }

    /// 自检查点以来消耗的位区间
    pub fn consumed(&self) -> BitSpan {
        BitSpan::new(self.mark, self.pos - self.mark)
    }

    /// 取出自检查点以来消耗的位区间, 并在当前位置重新设置检查点
    pub fn take_consumed(&mut self) -> BitSpan {
        let span = self.consumed();
        self.mark = self.pos;
        span
    }

    /// 丢弃自检查点以来的消耗记录
    pub fn clear_consumed(&mut self) {
        self.mark = self.pos;
    }

    /// 获取底层数据的引用
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bits_basic() {
        let data = [0b1011_0001, 0b0101_0101];
        let mut bc = BitCursor::new(&data);

        assert_eq!(bc.read_bits(1).unwrap(), 1);
        assert_eq!(bc.read_bits(1).unwrap(), 0);
        assert_eq!(bc.read_bits(2).unwrap(), 0b11);
        assert_eq!(bc.read_bits(4).unwrap(), 0b0001);
        assert_eq!(bc.read_bits(8).unwrap(), 0b0101_0101);
        assert!(bc.is_empty());
    }

    #[test]
    fn test_read_bits_32_bit() {
        let data = [0xFF, 0x00, 0xFF, 0x00, 0xA5];
        let mut bc = BitCursor::new(&data);
        bc.read_bits(4).unwrap();
        assert_eq!(bc.read_bits(32).unwrap(), 0xF00F_F00A);
        assert_eq!(bc.remaining(), 4);
    }

    #[test]
    fn test_read_bits_超过_32_位() {
        let data = [0u8; 8];
        let mut bc = BitCursor::new(&data);
        assert!(matches!(
            bc.read_bits(33),
            Err(DualMonoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_耗尽不补零() {
        let data = [0xFF];
        let mut bc = BitCursor::new(&data);
        bc.read_bits(5).unwrap();
        match bc.read_bits(4) {
            Err(DualMonoError::Exhausted {
                requested,
                remaining,
            }) => {
                assert_eq!(requested, 4);
                assert_eq!(remaining, 3);
            }
            other => panic!("期望 Exhausted, 实际 {:?}", other),
        }
        // 失败的读取不应移动位置
        assert_eq!(bc.position(), 5);
    }

    #[test]
    fn test_read_bool() {
        let data = [0b1000_0000];
        let mut bc = BitCursor::new(&data);
        assert!(bc.read_bool().unwrap());
        assert!(!bc.read_bool().unwrap());
    }

    #[test]
    fn test_byte_align() {
        let data = [0b1010_1101, 0xCC];
        let mut bc = BitCursor::new(&data);
        bc.read_bits(3).unwrap();
        assert_eq!(bc.byte_align().unwrap(), 0b01101);
        assert_eq!(bc.position(), 8);
        // 已对齐时不消耗
        assert_eq!(bc.byte_align().unwrap(), 0);
        assert_eq!(bc.position(), 8);
    }

    #[test]
    fn test_检查点区间() {
        let data = [0b1110_0101, 0b1100_0000];
        let mut bc = BitCursor::new(&data);

        bc.read_bits(3).unwrap();
        let first = bc.take_consumed();
        assert_eq!(first, BitSpan::new(0, 3));

        bc.read_bits(7).unwrap();
        assert_eq!(bc.consumed(), BitSpan::new(3, 7));
        let second = bc.take_consumed();
        assert_eq!(second.to_bytes(&data), vec![0b0010_1110]);

        bc.read_bits(2).unwrap();
        bc.clear_consumed();
        assert!(bc.consumed().is_empty());
    }

    #[test]
    fn test_skip_bits() {
        let data = [0u8; 10];
        let mut bc = BitCursor::new(&data);
        bc.skip_bits(70).unwrap();
        assert_eq!(bc.remaining(), 10);
        assert!(bc.skip_bits(11).is_err());
    }
}
