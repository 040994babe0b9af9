//! ADTS 帧头部编解码.
//!
//! # ADTS 帧头部 (7 字节, MSB first)
//! ```text
//!   syncword (12 bits = 0xFFF)
//!   ID (1 bit): 0=MPEG-4, 1=MPEG-2
//!   layer (2 bits): always 0
//!   protection_absent (1 bit): 1=no CRC, 0=CRC present
//!   profile (2 bits)
//!   sampling_frequency_index (4 bits)
//!   private_bit (1 bit)
//!   channel_configuration (3 bits): 0 = 由 PCE 描述 (双单声道)
//!   original_copy / home (各 1 bit)
//!   copyright_identification_bit / start (各 1 bit)
//!   frame_length (13 bits): 含头部的完整帧大小
//!   adts_buffer_fullness (11 bits)
//!   number_of_raw_data_blocks_in_frame (2 bits): 块数减一
//! [CRC (16 bits)] 仅当 protection_absent=0
//! ```

use dualmono_core::{DualMonoError, DualMonoResult};

/// 固定头部大小
pub const ADTS_HEADER_SIZE: usize = 7;
/// CRC 字段大小
pub const ADTS_CRC_SIZE: usize = 2;
/// frame_length 字段 (13 位) 能表示的最大帧长
pub const ADTS_MAX_FRAME_LENGTH: usize = 0x1FFF;
/// 同步字
pub const ADTS_SYNC_WORD: u16 = 0xFFF;

/// AAC 采样率索引表 (ISO 14496-3)
const AAC_SAMPLE_RATES: [u32; 16] = [
    96000, 88200, 64000, 48000, 44100, 32000, 24000, 22050, 16000, 12000, 11025, 8000, 7350, 0, 0,
    0,
];

/// ADTS 帧头部
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdtsHeader {
    pub syncword: u16,
    pub mpeg_version: u8,
    pub layer: u8,
    pub protection_absent: bool,
    pub profile: u8,
    pub sampling_frequency_index: u8,
    pub private_bit: bool,
    pub channel_configuration: u8,
    pub originality: bool,
    pub home: bool,
    pub copyright_id_bit: bool,
    pub copyright_id_start: bool,
    /// 帧总大小 (含头部与 CRC)
    pub frame_length: u16,
    pub buffer_fullness: u16,
    /// number_of_raw_data_blocks_in_frame (块数减一)
    pub raw_data_blocks: u8,
}

impl Default for AdtsHeader {
    /// MPEG-4 AAC LC, 48 kHz, 无 CRC, 可变码率, 空载荷
    fn default() -> Self {
        Self {
            syncword: ADTS_SYNC_WORD,
            mpeg_version: 0,
            layer: 0,
            protection_absent: true,
            profile: 1,
            sampling_frequency_index: 3,
            private_bit: false,
            channel_configuration: 0,
            originality: false,
            home: false,
            copyright_id_bit: false,
            copyright_id_start: false,
            frame_length: ADTS_HEADER_SIZE as u16,
            buffer_fullness: 0x7FF,
            raw_data_blocks: 0,
        }
    }
}

impl AdtsHeader {
    /// 按固定位置解析 7 字节头部
    ///
    /// 不校验同步字, 由调用方 (帧切分器) 负责定位.
    pub fn parse(data: &[u8]) -> DualMonoResult<Self> {
        if data.len() < ADTS_HEADER_SIZE {
            return Err(DualMonoError::exhausted(
                ADTS_HEADER_SIZE * 8,
                data.len() * 8,
            ));
        }

        Ok(Self {
            syncword: (u16::from(data[0]) << 4) | (u16::from(data[1]) >> 4),
            mpeg_version: (data[1] >> 3) & 0x01,
            layer: (data[1] >> 1) & 0x03,
            protection_absent: data[1] & 0x01 != 0,
            profile: (data[2] & 0xC0) >> 6,
            sampling_frequency_index: (data[2] >> 2) & 0x0F,
            private_bit: data[2] & 0x02 != 0,
            channel_configuration: ((data[2] & 0x01) << 2) | (data[3] >> 6),
            originality: data[3] & 0x20 != 0,
            home: data[3] & 0x10 != 0,
            copyright_id_bit: data[3] & 0x08 != 0,
            copyright_id_start: data[3] & 0x04 != 0,
            frame_length: (u16::from(data[3] & 0x03) << 11)
                | (u16::from(data[4]) << 3)
                | (u16::from(data[5]) >> 5),
            buffer_fullness: (u16::from(data[5] & 0x1F) << 6) | (u16::from(data[6]) >> 2),
            raw_data_blocks: data[6] & 0x03,
        })
    }

    /// 生成 7 字节头部 (不含 CRC)
    pub fn to_bytes(&self) -> [u8; ADTS_HEADER_SIZE] {
        let fl = self.frame_length & 0x1FFF;
        let bf = self.buffer_fullness & 0x7FF;
        let ch = self.channel_configuration & 0x07;
        [
            (self.syncword >> 4) as u8,
            ((self.syncword & 0x0F) as u8) << 4
                | (self.mpeg_version & 0x01) << 3
                | (self.layer & 0x03) << 1
                | u8::from(self.protection_absent),
            (self.profile & 0x03) << 6
                | (self.sampling_frequency_index & 0x0F) << 2
                | u8::from(self.private_bit) << 1
                | ch >> 2,
            (ch & 0x03) << 6
                | u8::from(self.originality) << 5
                | u8::from(self.home) << 4
                | u8::from(self.copyright_id_bit) << 3
                | u8::from(self.copyright_id_start) << 2
                | (fl >> 11) as u8,
            (fl >> 3) as u8,
            ((fl & 0x07) as u8) << 5 | (bf >> 6) as u8,
            ((bf & 0x3F) as u8) << 2 | (self.raw_data_blocks & 0x03),
        ]
    }

    /// 是否携带 CRC
    pub fn has_crc(&self) -> bool {
        !self.protection_absent
    }

    /// 头部大小 (7 或 9 字节)
    pub fn header_len(&self) -> usize {
        if self.has_crc() {
            ADTS_HEADER_SIZE + ADTS_CRC_SIZE
        } else {
            ADTS_HEADER_SIZE
        }
    }

    /// 第一个原始数据块的起始字节偏移
    ///
    /// 每多一个原始数据块, 头部后多一个 16 位的块位置字.
    pub fn payload_offset(&self) -> usize {
        self.header_len() + 2 * usize::from(self.raw_data_blocks)
    }

    /// 同步字与 layer 是否有效
    pub fn is_valid_sync(&self) -> bool {
        self.syncword == ADTS_SYNC_WORD && self.layer == 0
    }

    /// 采样率 (Hz), 保留索引返回 None
    pub fn sample_rate(&self) -> Option<u32> {
        match AAC_SAMPLE_RATES[usize::from(self.sampling_frequency_index & 0x0F)] {
            0 => None,
            rate => Some(rate),
        }
    }

    /// 为新载荷生成头部
    ///
    /// 复制其余字段, 覆盖 channel_configuration, 去掉 CRC, 每帧一个原始数据块,
    /// frame_length = 7 + payload_len.
    pub fn reframe(&self, channel_configuration: u8, payload_len: usize) -> DualMonoResult<Self> {
        let frame_length = ADTS_HEADER_SIZE + payload_len;
        if frame_length > ADTS_MAX_FRAME_LENGTH {
            return Err(DualMonoError::InvalidData(format!(
                "ADTS 帧长度超出限制: {} > {}",
                frame_length, ADTS_MAX_FRAME_LENGTH
            )));
        }
        Ok(Self {
            protection_absent: true,
            channel_configuration,
            frame_length: frame_length as u16,
            raw_data_blocks: 0,
            ..*self
        })
    }

    /// 生成完整的 ADTS 帧: 新头部 + 载荷
    pub fn build_frame(&self, channel_configuration: u8, payload: &[u8]) -> DualMonoResult<Vec<u8>> {
        let header = self.reframe(channel_configuration, payload.len())?;
        let mut frame = Vec::with_capacity(usize::from(header.frame_length));
        frame.extend_from_slice(&header.to_bytes());
        frame.extend_from_slice(payload);
        Ok(frame)
    }
}
