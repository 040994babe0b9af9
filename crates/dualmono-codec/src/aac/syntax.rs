//! AAC LC 原始数据块 (raw_data_block) 语法遍历.
//!
//! 按 ISO/IEC 13818-7 的语法表逐位读取各语法元素, 不重建任何采样,
//! 只为确定每个元素精确的位边界. 任何一个字段读错都会使后续所有位错位.
//!
//! 比例因子频带表固定使用 48 kHz 版本 (与 44.1 kHz 相同).

use dualmono_core::{BitCursor, BitSpan, DualMonoError, DualMonoResult};
use log::{debug, trace, warn};

use super::codebook::{CodebookInfo, ESC_HCB, ZERO_HCB, read_spectral_group};
use super::huffman::{AacCodebooks, codebooks};

/// 长窗口比例因子频带数
pub const NUM_SWB_LONG: usize = 49;
/// 短窗口比例因子频带数
pub const NUM_SWB_SHORT: usize = 14;
/// 预测器最大频带数
const PRED_SFB_MAX: usize = 40;

/// 长窗口频带偏移 (1024 点)
#[rustfmt::skip]
pub(crate) const SWB_OFFSET_LONG: [usize; NUM_SWB_LONG + 1] = [
    0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 48, 56, 64, 72, 80, 88, 96,
    108, 120, 132, 144, 160, 176, 196, 216, 240, 264, 292, 320, 352, 384,
    416, 448, 480, 512, 544, 576, 608, 640, 672, 704, 736, 768, 800, 832,
    864, 896, 928, 1024,
];

/// 短窗口频带偏移 (128 点)
#[rustfmt::skip]
pub(crate) const SWB_OFFSET_SHORT: [usize; NUM_SWB_SHORT + 1] = [
    0, 4, 8, 12, 16, 20, 28, 36, 44, 56, 68, 80, 96, 112, 128,
];

// extension_payload 类型
const EXT_FILL_DATA: u32 = 0b0001;
const EXT_DYNAMIC_RANGE: u32 = 0b1011;
const EXT_SBR_DATA: u32 = 0b1101;
const EXT_SBR_DATA_CRC: u32 = 0b1110;

/// 语法元素标识 (id_syn_ele, 3 位)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementId {
    /// 单声道元素
    Sce = 0,
    /// 声道对元素
    Cpe = 1,
    /// 耦合声道元素
    Cce = 2,
    /// 低频效果元素
    Lfe = 3,
    /// 数据流元素
    Dse = 4,
    /// 节目配置元素
    Pce = 5,
    /// 填充元素
    Fil = 6,
    /// 结束标记
    End = 7,
}

impl ElementId {
    /// 元素标识的位宽
    pub const BITS: u32 = 3;

    /// 从 3 位字段值构造
    pub fn from_bits(value: u32) -> Self {
        match value & 0x07 {
            0 => Self::Sce,
            1 => Self::Cpe,
            2 => Self::Cce,
            3 => Self::Lfe,
            4 => Self::Dse,
            5 => Self::Pce,
            6 => Self::Fil,
            _ => Self::End,
        }
    }

    /// 元素简称
    pub fn name(self) -> &'static str {
        match self {
            Self::Sce => "SCE",
            Self::Cpe => "CPE",
            Self::Cce => "CCE",
            Self::Lfe => "LFE",
            Self::Dse => "DSE",
            Self::Pce => "PCE",
            Self::Fil => "FIL",
            Self::End => "END",
        }
    }
}

/// 窗口序列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSequence {
    OnlyLong,
    LongStart,
    EightShort,
    LongStop,
}

impl WindowSequence {
    fn from_bits(value: u32) -> Self {
        match value & 0x03 {
            0 => Self::OnlyLong,
            1 => Self::LongStart,
            2 => Self::EightShort,
            _ => Self::LongStop,
        }
    }

    /// 是否为 8 个短窗口
    pub fn is_eight_short(self) -> bool {
        self == Self::EightShort
    }
}

/// ics_info 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcsInfo {
    pub window_sequence: WindowSequence,
    pub window_shape: u8,
    pub max_sfb: usize,
    /// 仅 EIGHT_SHORT 有效
    pub scale_factor_grouping: u8,
    pub predictor_data_present: bool,
}

/// 一个段: 连续频带共享同一码本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub cb: u8,
    pub start: usize,
    pub end: usize,
}

/// 窗口分组及每组的频带系数偏移
#[derive(Debug, Clone, PartialEq, Eq)]
struct WindowLayout {
    /// 每组包含的窗口数
    group_lengths: Vec<usize>,
    /// 每组 max_sfb + 1 个偏移
    sfb_offsets: Vec<Vec<usize>>,
}

impl WindowLayout {
    fn new(info: &IcsInfo) -> Self {
        if !info.window_sequence.is_eight_short() {
            return Self {
                group_lengths: vec![1],
                sfb_offsets: vec![SWB_OFFSET_LONG[..=info.max_sfb].to_vec()],
            };
        }

        // 分组位为 0 开始新组, 为 1 并入前一组
        let mut group_lengths = vec![1usize];
        for i in 0..7 {
            if info.scale_factor_grouping & (1 << (6 - i)) == 0 {
                group_lengths.push(1);
            } else if let Some(last) = group_lengths.last_mut() {
                *last += 1;
            }
        }

        let sfb_offsets = group_lengths
            .iter()
            .map(|&len| {
                let mut offsets = Vec::with_capacity(info.max_sfb + 1);
                let mut offset = 0usize;
                offsets.push(offset);
                for sfb in 0..info.max_sfb {
                    offset += (SWB_OFFSET_SHORT[sfb + 1] - SWB_OFFSET_SHORT[sfb]) * len;
                    offsets.push(offset);
                }
                offsets
            })
            .collect();

        Self {
            group_lengths,
            sfb_offsets,
        }
    }

    fn num_groups(&self) -> usize {
        self.group_lengths.len()
    }
}

/// 一个语法元素在原始数据块中占用的位区间 (含 3 位元素标识)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawElement {
    pub id: ElementId,
    pub span: BitSpan,
}

impl RawElement {
    /// 去掉元素标识之后的位区间
    pub fn body(&self) -> BitSpan {
        let skip = (ElementId::BITS as usize).min(self.span.len);
        BitSpan::new(self.span.start + skip, self.span.len - skip)
    }
}

// ============================================================
// individual_channel_stream
// ============================================================

/// 解析 ics_info
pub fn ics_info(bc: &mut BitCursor) -> DualMonoResult<IcsInfo> {
    let _ics_reserved_bit = bc.read_bits(1)?;
    let window_sequence = WindowSequence::from_bits(bc.read_bits(2)?);
    let window_shape = bc.read_bits(1)? as u8;

    if window_sequence.is_eight_short() {
        let max_sfb = bc.read_bits(4)? as usize;
        if max_sfb > NUM_SWB_SHORT {
            return Err(DualMonoError::Decode(format!(
                "AAC: 短窗口 max_sfb={} 超过频带数 {}",
                max_sfb, NUM_SWB_SHORT
            )));
        }
        let scale_factor_grouping = bc.read_bits(7)? as u8;
        return Ok(IcsInfo {
            window_sequence,
            window_shape,
            max_sfb,
            scale_factor_grouping,
            predictor_data_present: false,
        });
    }

    let max_sfb = bc.read_bits(6)? as usize;
    if max_sfb > NUM_SWB_LONG {
        return Err(DualMonoError::Decode(format!(
            "AAC: 长窗口 max_sfb={} 超过频带数 {}",
            max_sfb, NUM_SWB_LONG
        )));
    }
    let predictor_data_present = bc.read_bool()?;
    if predictor_data_present {
        if bc.read_bool()? {
            let _predictor_reset_group_number = bc.read_bits(5)?;
        }
        for _ in 0..max_sfb.min(PRED_SFB_MAX) {
            let _prediction_used = bc.read_bits(1)?;
        }
    }

    Ok(IcsInfo {
        window_sequence,
        window_shape,
        max_sfb,
        scale_factor_grouping: 0,
        predictor_data_present,
    })
}

/// 解析 section_data, 返回每个窗口组的段列表
fn section_data(
    bc: &mut BitCursor,
    info: &IcsInfo,
    num_groups: usize,
) -> DualMonoResult<Vec<Vec<Section>>> {
    let (len_bits, esc_val) = if info.window_sequence.is_eight_short() {
        (3, (1 << 3) - 1)
    } else {
        (5, (1 << 5) - 1)
    };

    let mut groups = Vec::with_capacity(num_groups);
    for g in 0..num_groups {
        let mut sections = Vec::new();
        let mut k = 0usize;
        while k < info.max_sfb {
            let cb = bc.read_bits(4)? as u8;
            let mut sect_len = 0usize;
            loop {
                let incr = bc.read_bits(len_bits)?;
                sect_len += incr as usize;
                if incr != esc_val {
                    break;
                }
            }

            let end = k + sect_len;
            if end > info.max_sfb {
                return Err(DualMonoError::Decode(format!(
                    "AAC: section 越界, 组 {} 段 [{}, {}) 超过 max_sfb={}",
                    g, k, end, info.max_sfb
                )));
            }
            trace!("AAC section: g={}, cb={}, [{}, {})", g, cb, k, end);
            sections.push(Section { cb, start: k, end });
            k = end;
        }
        groups.push(sections);
    }
    Ok(groups)
}

/// 解析 scale_factor_data: 每个非 ZERO_HCB 频带读取一个比例因子码字
fn scale_factor_data(
    bc: &mut BitCursor,
    sections: &[Vec<Section>],
    books: &AacCodebooks,
) -> DualMonoResult<()> {
    for section in sections.iter().flatten() {
        if section.cb == ZERO_HCB {
            continue;
        }
        for _ in section.start..section.end {
            books.scalefactor.decode(bc)?;
        }
    }
    Ok(())
}

/// 跳过 pulse_data
fn pulse_data(bc: &mut BitCursor) -> DualMonoResult<()> {
    let number_pulse = bc.read_bits(2)?;
    let _pulse_start_sfb = bc.read_bits(6)?;
    for _ in 0..=number_pulse {
        let _pulse_offset = bc.read_bits(5)?;
        let _pulse_amp = bc.read_bits(4)?;
    }
    Ok(())
}

/// 跳过 tns_data
fn tns_data(bc: &mut BitCursor, window_sequence: WindowSequence) -> DualMonoResult<()> {
    let (num_windows, n_filt_bits, length_bits, order_bits) = if window_sequence.is_eight_short()
    {
        (8, 1, 4, 3)
    } else {
        (1, 2, 6, 5)
    };

    for _ in 0..num_windows {
        let n_filt = bc.read_bits(n_filt_bits)?;
        let mut coef_bits = 3;
        if n_filt > 0 && bc.read_bool()? {
            coef_bits = 4;
        }
        for _ in 0..n_filt {
            let _length = bc.read_bits(length_bits)?;
            let order = bc.read_bits(order_bits)?;
            if order > 0 {
                let _direction = bc.read_bits(1)?;
                let coef_compress = bc.read_bits(1)?;
                for _ in 0..order {
                    let _coef = bc.read_bits(coef_bits - coef_compress)?;
                }
            }
        }
    }
    Ok(())
}

/// 跳过 gain_control_data
fn gain_control_data(bc: &mut BitCursor, window_sequence: WindowSequence) -> DualMonoResult<()> {
    let max_band = bc.read_bits(2)?;
    // (窗口数, 首窗口 aloccode 位宽, 其余窗口 aloccode 位宽)
    let (num_windows, first_loc_bits, loc_bits) = match window_sequence {
        WindowSequence::OnlyLong => (1, 5, 5),
        WindowSequence::LongStart => (2, 4, 2),
        WindowSequence::EightShort => (8, 2, 2),
        WindowSequence::LongStop => (2, 4, 5),
    };

    // 频带 0 不携带增益控制信息
    for _ in 1..=max_band {
        for wd in 0..num_windows {
            let adjust_num = bc.read_bits(3)?;
            let alocbits = if wd == 0 { first_loc_bits } else { loc_bits };
            for _ in 0..adjust_num {
                let _alevcode = bc.read_bits(4)?;
                let _aloccode = bc.read_bits(alocbits)?;
            }
        }
    }
    Ok(())
}

/// 跳过 spectral_data
fn spectral_data(
    bc: &mut BitCursor,
    layout: &WindowLayout,
    sections: &[Vec<Section>],
    books: &AacCodebooks,
) -> DualMonoResult<()> {
    for (g, group) in sections.iter().enumerate() {
        let offsets = &layout.sfb_offsets[g];
        for section in group {
            if section.cb == ZERO_HCB || section.cb > ESC_HCB {
                continue;
            }
            let (Some(info), Some(tree)) =
                (CodebookInfo::lookup(section.cb), books.spectral(section.cb))
            else {
                continue;
            };

            let mut k = offsets[section.start];
            let end = offsets[section.end];
            while k < end {
                k += read_spectral_group(bc, info, tree)?.len;
            }
        }
    }
    Ok(())
}

/// 解析 individual_channel_stream
///
/// 双单声道中两个声道从不共享窗口, `common_window` 为 true 时返回 Unsupported.
pub fn individual_channel_stream(
    bc: &mut BitCursor,
    common_window: bool,
    books: &AacCodebooks,
) -> DualMonoResult<IcsInfo> {
    if common_window {
        return Err(DualMonoError::Unsupported(
            "AAC: 不支持 common_window=1 的声道流".into(),
        ));
    }

    let global_gain = bc.read_bits(8)?;
    let info = ics_info(bc)?;
    let layout = WindowLayout::new(&info);

    let sections = section_data(bc, &info, layout.num_groups())?;
    scale_factor_data(bc, &sections, books)?;

    let pulse_data_present = bc.read_bool()?;
    if pulse_data_present {
        pulse_data(bc)?;
    }
    let tns_data_present = bc.read_bool()?;
    if tns_data_present {
        tns_data(bc, info.window_sequence)?;
    }
    let gain_control_data_present = bc.read_bool()?;
    if gain_control_data_present {
        gain_control_data(bc, info.window_sequence)?;
    }

    trace!(
        "AAC ICS: win={:?}, max_sfb={}, gain={}, groups={}, pulse={}, tns={}, gc={}",
        info.window_sequence,
        info.max_sfb,
        global_gain,
        layout.num_groups(),
        pulse_data_present,
        tns_data_present,
        gain_control_data_present,
    );

    spectral_data(bc, &layout, &sections, books)?;
    Ok(info)
}

// ============================================================
// 语法元素
// ============================================================

/// 解析 single_channel_element (LFE 语法相同), 返回 element_instance_tag
pub fn single_channel_element(bc: &mut BitCursor, books: &AacCodebooks) -> DualMonoResult<u8> {
    let element_instance_tag = bc.read_bits(4)? as u8;
    individual_channel_stream(bc, false, books)?;
    Ok(element_instance_tag)
}

/// 解析 program_config_element
pub fn program_config_element(bc: &mut BitCursor) -> DualMonoResult<()> {
    let _element_instance_tag = bc.read_bits(4)?;
    let _profile = bc.read_bits(2)?;
    let _sampling_frequency_index = bc.read_bits(4)?;
    let num_front = bc.read_bits(4)?;
    let num_side = bc.read_bits(4)?;
    let num_back = bc.read_bits(4)?;
    let num_lfe = bc.read_bits(2)?;
    let num_assoc_data = bc.read_bits(3)?;
    let num_valid_cc = bc.read_bits(4)?;

    // mono / stereo mixdown
    for _ in 0..2 {
        if bc.read_bool()? {
            let _element_number = bc.read_bits(4)?;
        }
    }
    if bc.read_bool()? {
        let _matrix_mixdown_idx = bc.read_bits(2)?;
        let _pseudo_surround_enable = bc.read_bits(1)?;
    }

    // front / side / back: is_cpe(1) + tag_select(4)
    for _ in 0..(num_front + num_side + num_back) {
        let _is_cpe = bc.read_bits(1)?;
        let _tag_select = bc.read_bits(4)?;
    }
    for _ in 0..(num_lfe + num_assoc_data) {
        let _tag_select = bc.read_bits(4)?;
    }
    for _ in 0..num_valid_cc {
        let _cc_element_is_ind_sw = bc.read_bits(1)?;
        let _valid_cc_element_tag_select = bc.read_bits(4)?;
    }

    bc.byte_align()?;

    let comment_field_bytes = bc.read_bits(8)? as usize;
    bc.skip_bits(comment_field_bytes * 8)
}

/// 解析 data_stream_element
pub fn data_stream_element(bc: &mut BitCursor) -> DualMonoResult<()> {
    let _element_instance_tag = bc.read_bits(4)?;
    let data_byte_align_flag = bc.read_bool()?;
    let mut count = bc.read_bits(8)? as usize;
    if count == 255 {
        count += bc.read_bits(8)? as usize;
    }
    if data_byte_align_flag {
        bc.byte_align()?;
    }
    bc.skip_bits(count * 8)
}

/// 解析 fill_element
pub fn fill_element(bc: &mut BitCursor) -> DualMonoResult<()> {
    let mut cnt = bc.read_bits(4)? as usize;
    if cnt == 15 {
        cnt += bc.read_bits(8)? as usize;
        cnt -= 1;
    }
    while cnt > 0 {
        cnt -= extension_payload(bc, cnt)?;
    }
    Ok(())
}

/// 解析 extension_payload, 返回消耗的字节计数
///
/// 动态范围 (DRC) 与 SBR 扩展不在本配置的预期之内, 返回 Unsupported.
fn extension_payload(bc: &mut BitCursor, cnt: usize) -> DualMonoResult<usize> {
    let extension_type = bc.read_bits(4)?;
    match extension_type {
        EXT_FILL_DATA => {
            let _fill_nibble = bc.read_bits(4)?;
            bc.skip_bits(8 * (cnt - 1))?;
        }
        EXT_DYNAMIC_RANGE => {
            return Err(DualMonoError::Unsupported(
                "AAC: 不支持动态范围 (DRC) 扩展载荷".into(),
            ));
        }
        EXT_SBR_DATA | EXT_SBR_DATA_CRC => {
            return Err(DualMonoError::Unsupported(format!(
                "AAC: 不支持 SBR 扩展载荷 (类型 {:#06b})",
                extension_type
            )));
        }
        _ => bc.skip_bits(8 * (cnt - 1) + 4)?,
    }
    Ok(cnt)
}

/// 按元素标识分派解析一个语法元素 (标识本身已读取)
pub fn parse_element(
    bc: &mut BitCursor,
    id: ElementId,
    books: &AacCodebooks,
) -> DualMonoResult<()> {
    match id {
        ElementId::Sce | ElementId::Lfe => {
            single_channel_element(bc, books)?;
        }
        ElementId::Pce => program_config_element(bc)?,
        ElementId::Fil => fill_element(bc)?,
        ElementId::Dse => data_stream_element(bc)?,
        ElementId::End => {}
        ElementId::Cpe | ElementId::Cce => {
            warn!(
                "AAC: 双单声道流中出现 {} 元素 (位置 {}), 跳过",
                id.name(),
                bc.position()
            );
        }
    }
    Ok(())
}

/// 遍历一个原始数据块, 返回每个语法元素的位区间
///
/// 遇到 END 或输入耗尽时结束; END 存在时为最后一项.
pub fn scan_raw_data_block(payload: &[u8]) -> DualMonoResult<Vec<RawElement>> {
    let books = codebooks();
    let mut bc = BitCursor::new(payload);
    let mut elements = Vec::new();

    while !bc.is_empty() {
        bc.clear_consumed();
        let id = ElementId::from_bits(bc.read_bits(ElementId::BITS)?);
        parse_element(&mut bc, id, books)?;
        let span = bc.take_consumed();
        debug!(
            "AAC {}: 位区间 [{}, {}), 剩余 {} 位",
            id.name(),
            span.start,
            span.end(),
            bc.remaining()
        );
        elements.push(RawElement { id, span });
        if id == ElementId::End {
            break;
        }
    }

    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_info(max_sfb: usize, grouping: u8) -> IcsInfo {
        IcsInfo {
            window_sequence: WindowSequence::EightShort,
            window_shape: 0,
            max_sfb,
            scale_factor_grouping: grouping,
            predictor_data_present: false,
        }
    }

    #[test]
    fn test_短窗口分组() {
        let layout = WindowLayout::new(&short_info(3, 0b011_0100));
        assert_eq!(layout.group_lengths, vec![1, 3, 2, 1, 1]);
        assert_eq!(layout.sfb_offsets[0], vec![0, 4, 8, 12]);
        assert_eq!(layout.sfb_offsets[1], vec![0, 12, 24, 36]);

        let layout = WindowLayout::new(&short_info(14, 0));
        assert_eq!(layout.num_groups(), 8);
        assert_eq!(layout.sfb_offsets[7].last(), Some(&128));

        let layout = WindowLayout::new(&short_info(14, 0b111_1111));
        assert_eq!(layout.group_lengths, vec![8]);
        assert_eq!(layout.sfb_offsets[0].last(), Some(&1024));
    }

    #[test]
    fn test_长窗口频带偏移() {
        let info = IcsInfo {
            window_sequence: WindowSequence::LongStart,
            window_shape: 1,
            max_sfb: NUM_SWB_LONG,
            scale_factor_grouping: 0,
            predictor_data_present: false,
        };
        let layout = WindowLayout::new(&info);
        assert_eq!(layout.num_groups(), 1);
        assert_eq!(layout.sfb_offsets[0].len(), NUM_SWB_LONG + 1);
        assert_eq!(layout.sfb_offsets[0].last(), Some(&1024));
    }

    #[test]
    fn test_元素标识() {
        for v in 0..8u32 {
            assert_eq!(ElementId::from_bits(v) as u32, v);
        }
        assert_eq!(ElementId::from_bits(6).name(), "FIL");
    }
}
