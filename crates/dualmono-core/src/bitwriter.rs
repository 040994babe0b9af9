//! 比特流写入器.
//!
//! 向字节缓冲区按位写入数据 (MSB first), 与 [`BitCursor`](crate::BitCursor) 对应.
//! 转封装时用它把游标捕获的位区间拼接成新的原始数据块.

/// 比特流写入器
///
/// 未满一个字节的位暂存在累加器中, 凑满 8 位即输出.
///
/// # 示例
/// ```
/// use dualmono_core::bitwriter::BitWriter;
///
/// let mut bw = BitWriter::new();
/// bw.write_bits(0b1011, 4);
/// bw.write_bits(0b0001, 4);
/// bw.write_bits(0b01010101, 8);
/// let data = bw.finish();
/// assert_eq!(data, vec![0b10110001, 0b01010101]);
/// ```
pub struct BitWriter {
    /// 已写满的字节
    buf: Vec<u8>,
    /// 尚未凑满一个字节的位, 右对齐
    acc: u64,
    /// `acc` 中的有效位数 (0-7)
    acc_len: u32,
}

impl BitWriter {
    /// 创建新的比特流写入器
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 以指定容量 (字节) 创建比特流写入器
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            acc: 0,
            acc_len: 0,
        }
    }

    /// 已写入的总位数
    pub fn bits_written(&self) -> usize {
        self.buf.len() * 8 + self.acc_len as usize
    }

    /// 写入 1 个位 (取 `bit` 的最低位)
    pub fn write_bit(&mut self, bit: u32) {
        self.write_bits(bit & 1, 1);
    }

    /// 写入 `value` 的低 `n` 位 (n <= 32), 高位在前
    pub fn write_bits(&mut self, value: u32, n: u32) {
        debug_assert!(n <= 32, "write_bits: n={} 超过 32 位", n);
        if n == 0 {
            return;
        }

        let mask = (1u64 << n) - 1;
        self.acc = (self.acc << n) | (u64::from(value) & mask);
        self.acc_len += n;
        while self.acc_len >= 8 {
            self.acc_len -= 8;
            self.buf.push((self.acc >> self.acc_len) as u8);
        }
        self.acc &= (1u64 << self.acc_len) - 1;
    }

    /// 从 `source` 的第 `start_bit` 位起拷贝 `len` 个位
    ///
    /// 超出 `source` 末尾的位按 0 写入.
    pub fn write_bit_span(&mut self, source: &[u8], start_bit: usize, len: usize) {
        let mut pos = start_bit;
        let end = start_bit + len;

        // 源和目标同时字节对齐时整字节拷贝
        if pos % 8 == 0 && self.acc_len == 0 {
            let first = pos / 8;
            let whole = (len / 8).min(source.len().saturating_sub(first));
            self.buf.extend_from_slice(&source[first..first + whole]);
            pos += whole * 8;
        }

        while pos < end {
            let chunk = (end - pos).min(8 - pos % 8);
            let byte = source.get(pos / 8).copied().unwrap_or(0);
            let shift = 8 - pos % 8 - chunk;
            let bits = (byte >> shift) & (((1u16 << chunk) - 1) as u8);
            self.write_bits(u32::from(bits), chunk as u32);
            pos += chunk;
        }
    }

    /// 用 0 填充到字节边界
    pub fn align_to_byte(&mut self) {
        if self.acc_len > 0 {
            self.write_bits(0, 8 - self.acc_len);
        }
    }

    /// 写入完整字节, 当前未对齐时逐字节按位写入
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        if self.acc_len == 0 {
            self.buf.extend_from_slice(bytes);
            return;
        }
        for &b in bytes {
            self.write_bits(u32::from(b), 8);
        }
    }

    /// 补齐最后一个字节并返回数据
    pub fn finish(mut self) -> Vec<u8> {
        self.align_to_byte();
        self.buf
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
