//! CRC 校验和计算.
//!
//! MPEG-TS 的 PSI 分段 (PAT/PMT) 以 CRC-32/MPEG-2 结尾 (多项式 0x04C11DB7,
//! 初始值 0xFFFFFFFF, 不反射, 不异或输出).

use crc::{CRC_32_MPEG_2, Crc};

const CRC32_MPEG2: Crc<u32> = Crc::<u32>::new(&CRC_32_MPEG_2);

/// 计算 CRC-32/MPEG-2
pub fn crc32_mpeg2(data: &[u8]) -> u32 {
    CRC32_MPEG2.checksum(data)
}

/// 校验以 4 字节大端 CRC 结尾的 PSI 分段
///
/// 对包含 CRC 字段在内的整个分段计算 CRC-32/MPEG-2, 结果为 0 表示校验通过.
pub fn verify_psi_section(section: &[u8]) -> bool {
    section.len() >= 4 && crc32_mpeg2(section) == 0
}
