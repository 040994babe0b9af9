//! 双单声道 AAC 转封装.
//!
//! 输入为一个 ADTS 访问单元 (channel_configuration = 0, 原始数据块内含两个 SCE),
//! 按语法元素的精确位区间重新组帧, 不做任何解码:
//! - 单声道模式: 每个 SCE 单独组成一个 1 声道 ADTS 帧.
//! - 立体声模式: 第一个 SCE 复制到 CPE 的左右两个声道, 组成 2 声道帧;
//!   第二个 SCE 按单声道方式组成副输出.
//!
//! 输出帧的载荷均以 END 结束并以 0 补齐到字节边界.

use std::fmt;

use dualmono_core::{BitSpan, BitWriter, DualMonoError, DualMonoResult};
use log::{debug, warn};

use crate::aac::{ElementId, RawElement, scan_raw_data_block};
use crate::adts::AdtsHeader;

/// 单声道输出的 channel_configuration
pub const MONO_CHANNEL_CONFIGURATION: u8 = 1;
/// 立体声输出的 channel_configuration
pub const STEREO_CHANNEL_CONFIGURATION: u8 = 2;

/// element_instance_tag 位宽
const ELEMENT_TAG_BITS: usize = 4;

/// 转封装模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransmuxMode {
    /// 拆分为两路单声道
    #[default]
    Mono,
    /// 主声道复制为立体声, 副声道保持单声道
    Stereo,
}

impl TransmuxMode {
    /// 模式名称
    pub fn name(self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Stereo => "stereo",
        }
    }
}

impl fmt::Display for TransmuxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 一个访问单元的转封装结果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransmuxOutput {
    /// 主输出 (完整 ADTS 帧)
    pub primary: Option<Vec<u8>>,
    /// 副输出 (完整 ADTS 帧)
    pub secondary: Option<Vec<u8>>,
    /// 输入不是双单声道, 主输出为原样输入
    pub passthrough: bool,
}

impl TransmuxOutput {
    fn passthrough(au: &[u8]) -> Self {
        Self {
            primary: Some(au.to_vec()),
            secondary: None,
            passthrough: true,
        }
    }

    /// 输出帧数 (0-2)
    pub fn frame_count(&self) -> usize {
        usize::from(self.primary.is_some()) + usize::from(self.secondary.is_some())
    }
}

/// 按模式转封装一个访问单元
pub fn transmux(au: &[u8], mode: TransmuxMode) -> DualMonoResult<TransmuxOutput> {
    match mode {
        TransmuxMode::Mono => transmux_mono(au),
        TransmuxMode::Stereo => transmux_stereo(au),
    }
}

/// 单声道模式: 第一个 SCE 为主输出, 第二个 SCE 为副输出, 均为 1 声道
pub fn transmux_mono(au: &[u8]) -> DualMonoResult<TransmuxOutput> {
    let Some(frame) = DualMonoFrame::parse(au)? else {
        return Ok(TransmuxOutput::passthrough(au));
    };

    let primary = frame
        .channels
        .first()
        .map(|sce| frame.mono_frame(sce))
        .transpose()?;
    let secondary = frame
        .channels
        .get(1)
        .map(|sce| frame.mono_frame(sce))
        .transpose()?;

    Ok(TransmuxOutput {
        primary,
        secondary,
        passthrough: false,
    })
}

/// 立体声模式: 第一个 SCE 复制为 2 声道 CPE 主输出, 第二个 SCE 为 1 声道副输出
pub fn transmux_stereo(au: &[u8]) -> DualMonoResult<TransmuxOutput> {
    let Some(frame) = DualMonoFrame::parse(au)? else {
        return Ok(TransmuxOutput::passthrough(au));
    };

    let primary = frame
        .channels
        .first()
        .map(|sce| frame.stereo_frame(sce))
        .transpose()?;
    let secondary = frame
        .channels
        .get(1)
        .map(|sce| frame.mono_frame(sce))
        .transpose()?;

    Ok(TransmuxOutput {
        primary,
        secondary,
        passthrough: false,
    })
}

/// 已完成语法遍历的双单声道访问单元
struct DualMonoFrame<'a> {
    header: AdtsHeader,
    /// 第一个原始数据块的字节
    payload: &'a [u8],
    /// 最多两个 SCE 元素
    channels: Vec<RawElement>,
}

impl<'a> DualMonoFrame<'a> {
    /// 解析头部并遍历第一个原始数据块
    ///
    /// channel_configuration 不为 0 时返回 None (直通).
    fn parse(au: &'a [u8]) -> DualMonoResult<Option<Self>> {
        let header = AdtsHeader::parse(au)?;
        if header.channel_configuration != 0 {
            debug!(
                "ADTS: channel_configuration={}, 非双单声道, 直通",
                header.channel_configuration
            );
            return Ok(None);
        }

        let begin = header.payload_offset();
        let end = usize::from(header.frame_length);
        if end > au.len() {
            return Err(DualMonoError::exhausted(end * 8, au.len() * 8));
        }
        if end < begin {
            return Err(DualMonoError::InvalidData(format!(
                "ADTS: frame_length={} 小于载荷起始偏移 {}",
                end, begin
            )));
        }
        if header.raw_data_blocks > 0 {
            debug!(
                "ADTS: 帧内含 {} 个原始数据块, 只处理第一个",
                header.raw_data_blocks + 1
            );
        }

        let payload = &au[begin..end];
        let elements = scan_raw_data_block(payload)?;

        let mut channels = Vec::with_capacity(2);
        for element in elements.into_iter().filter(|e| e.id == ElementId::Sce) {
            if channels.len() == 2 {
                warn!(
                    "AAC: 双单声道帧中出现第 3 个以上的 SCE (位置 {}), 忽略",
                    element.span.start
                );
                continue;
            }
            channels.push(element);
        }
        debug!(
            "ADTS: frame_length={}, 载荷 {} 字节, SCE {} 个",
            end,
            payload.len(),
            channels.len()
        );

        Ok(Some(Self {
            header,
            payload,
            channels,
        }))
    }

    /// SCE 原样 + END, 1 声道
    fn mono_frame(&self, sce: &RawElement) -> DualMonoResult<Vec<u8>> {
        let mut bw = BitWriter::with_capacity(sce.span.len.div_ceil(8) + 1);
        self.copy(&mut bw, sce.span);
        write_end(&mut bw);
        self.header
            .build_frame(MONO_CHANNEL_CONFIGURATION, &bw.finish())
    }

    /// CPE(tag, common_window=0, ics, ics) + END, 2 声道
    fn stereo_frame(&self, sce: &RawElement) -> DualMonoResult<Vec<u8>> {
        let body = sce.body();
        let tag_bits = ELEMENT_TAG_BITS.min(body.len);
        let tag = BitSpan::new(body.start, tag_bits);
        let ics = BitSpan::new(body.start + tag_bits, body.len - tag_bits);

        let mut bw = BitWriter::with_capacity(2 * ics.len.div_ceil(8) + 2);
        bw.write_bits(ElementId::Cpe as u32, ElementId::BITS);
        self.copy(&mut bw, tag);
        bw.write_bit(0); // common_window
        self.copy(&mut bw, ics);
        self.copy(&mut bw, ics);
        write_end(&mut bw);
        self.header
            .build_frame(STEREO_CHANNEL_CONFIGURATION, &bw.finish())
    }

    fn copy(&self, bw: &mut BitWriter, span: BitSpan) {
        bw.write_bit_span(self.payload, span.start, span.len);
    }
}

fn write_end(bw: &mut BitWriter) {
    bw.write_bits(ElementId::End as u32, ElementId::BITS);
}
