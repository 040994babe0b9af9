//! 双单声道转封装集成测试: TS / ADTS 输入 → 访问单元 → 单声道 / 立体声输出

use dualmono::codec::{AdtsHeader, ElementId, TransmuxMode, scan_raw_data_block, transmux};
use dualmono::core::BitWriter;
use dualmono::core::crc::crc32_mpeg2;
use dualmono::format::{ContainerKind, TsPesExtractor, probe, split_adts};

// ============================================================
// 辅助函数: 构建 AAC 原始数据块
// ============================================================

/// 一个长窗口 ICS 的可变部分
#[derive(Clone, Copy)]
struct Ics {
    global_gain: u32,
    /// 使用码本 1 编码的前若干个频带 (全零四元组), 其余为 ZERO_HCB
    coded_bands: u32,
    max_sfb: u32,
}

impl Ics {
    const SILENT: Ics = Ics {
        global_gain: 100,
        coded_bands: 0,
        max_sfb: 12,
    };
    const CODED: Ics = Ics {
        global_gain: 140,
        coded_bands: 2,
        max_sfb: 4,
    };
}

/// 48 kHz 长窗口前两个频带各 4 条谱线
const COEFS_PER_BAND: u32 = 4;

/// individual_channel_stream (common_window = 0)
fn write_ics(bw: &mut BitWriter, ics: Ics) {
    bw.write_bits(ics.global_gain, 8);
    bw.write_bits(0, 4); // reserved + ONLY_LONG_SEQUENCE + window_shape
    bw.write_bits(ics.max_sfb, 6);
    bw.write_bit(0); // predictor_data_present

    // section_data
    if ics.coded_bands > 0 {
        bw.write_bits(1, 4);
        bw.write_bits(ics.coded_bands, 5);
    }
    if ics.max_sfb > ics.coded_bands {
        bw.write_bits(0, 4);
        bw.write_bits(ics.max_sfb - ics.coded_bands, 5);
    }

    // scale_factor_data: 差值 0 的码字为 '0'
    for _ in 0..ics.coded_bands {
        bw.write_bit(0);
    }

    bw.write_bits(0, 3); // pulse / tns / gain_control

    // spectral_data: 码本 1 中全零四元组的码字为 '0'
    for _ in 0..ics.coded_bands * COEFS_PER_BAND / 4 {
        bw.write_bit(0);
    }
}

fn write_sce(bw: &mut BitWriter, tag: u32, ics: Ics) {
    bw.write_bits(0, 3);
    bw.write_bits(tag, 4);
    write_ics(bw, ics);
}

fn write_end(bw: &mut BitWriter) {
    bw.write_bits(7, 3);
}

/// channel_configuration=0 的双单声道访问单元
fn dual_mono_au(main: Ics, sub: Ics) -> Vec<u8> {
    let mut bw = BitWriter::new();
    write_sce(&mut bw, 0, main);
    // count=0 的 FIL 元素不进入任何输出
    bw.write_bits(6, 3);
    bw.write_bits(0, 4);
    write_sce(&mut bw, 1, sub);
    write_end(&mut bw);
    AdtsHeader::default().build_frame(0, &bw.finish()).unwrap()
}

fn expected_mono(tag: u32, ics: Ics) -> Vec<u8> {
    let mut bw = BitWriter::new();
    write_sce(&mut bw, tag, ics);
    write_end(&mut bw);
    AdtsHeader::default().build_frame(1, &bw.finish()).unwrap()
}

fn expected_stereo(tag: u32, ics: Ics) -> Vec<u8> {
    let mut bw = BitWriter::new();
    bw.write_bits(1, 3); // CPE
    bw.write_bits(tag, 4);
    bw.write_bit(0); // common_window
    write_ics(&mut bw, ics);
    write_ics(&mut bw, ics);
    write_end(&mut bw);
    AdtsHeader::default().build_frame(2, &bw.finish()).unwrap()
}

// ============================================================
// 辅助函数: 构建 TS 包
// ============================================================

const TS_PACKET_SIZE: usize = 188;
const PMT_PID: u16 = 0x1F0;
const AAC_PID: u16 = 0x111;

/// 构造 TS 包, 载荷不足时用 adaptation field 填充
fn build_ts_packet(pid: u16, pusi: bool, cc: u8, payload: &[u8]) -> [u8; TS_PACKET_SIZE] {
    let mut pkt = [0xFFu8; TS_PACKET_SIZE];
    pkt[0] = 0x47;
    pkt[1] = (if pusi { 0x40 } else { 0x00 }) | ((pid >> 8) as u8 & 0x1F);
    pkt[2] = pid as u8;

    let n = payload.len().min(TS_PACKET_SIZE - 4);
    let stuffing = TS_PACKET_SIZE - 4 - n;
    let start = if stuffing == 0 {
        pkt[3] = 0x10 | (cc & 0x0F);
        4
    } else {
        pkt[3] = 0x30 | (cc & 0x0F);
        pkt[4] = (stuffing - 1) as u8;
        if stuffing > 1 {
            pkt[5] = 0x00;
        }
        4 + stuffing
    };
    pkt[start..start + n].copy_from_slice(&payload[..n]);
    pkt
}

/// 给 PSI 段补上 section_length 与 CRC, 并加上 pointer_field
fn psi_payload(table_id: u8, body: &[u8]) -> Vec<u8> {
    let section_length = body.len() + 4;
    let mut section = vec![
        table_id,
        0xB0 | ((section_length >> 8) as u8 & 0x0F),
        section_length as u8,
    ];
    section.extend_from_slice(body);
    let crc = crc32_mpeg2(&section);
    section.extend_from_slice(&crc.to_be_bytes());

    let mut payload = vec![0x00];
    payload.extend(section);
    payload
}

fn build_pat() -> [u8; TS_PACKET_SIZE] {
    let body = [
        0x00,
        0x01, // transport_stream_id
        0xC1,
        0x00,
        0x00,
        0x00,
        0x01, // program_number
        0xE0 | (PMT_PID >> 8) as u8,
        PMT_PID as u8,
    ];
    build_ts_packet(0x0000, true, 0, &psi_payload(0x00, &body))
}

fn build_pmt() -> [u8; TS_PACKET_SIZE] {
    let body = [
        0x00,
        0x01, // program_number
        0xC1,
        0x00,
        0x00,
        0xE0 | (AAC_PID >> 8) as u8,
        AAC_PID as u8, // PCR_PID
        0xF0,
        0x00, // program_info_length
        0x0F, // ADTS AAC
        0xE0 | (AAC_PID >> 8) as u8,
        AAC_PID as u8,
        0xF0,
        0x00,
    ];
    build_ts_packet(PMT_PID, true, 0, &psi_payload(0x02, &body))
}

/// 编码 33-bit PTS 到 5 字节
fn encode_pts(pts: u64) -> [u8; 5] {
    [
        0x21 | ((((pts >> 30) as u8) & 0x07) << 1),
        (pts >> 22) as u8,
        0x01 | ((((pts >> 15) as u8) & 0x7F) << 1),
        (pts >> 7) as u8,
        0x01 | (((pts as u8) & 0x7F) << 1),
    ]
}

/// 构造音频 PES 并拆成 TS 包
fn build_pes_packets(pts: u64, data: &[u8]) -> Vec<u8> {
    let mut pes = vec![0x00, 0x00, 0x01, 0xC0];
    pes.extend_from_slice(&((3 + 5 + data.len()) as u16).to_be_bytes());
    pes.extend_from_slice(&[0x80, 0x80, 0x05]);
    pes.extend_from_slice(&encode_pts(pts));
    pes.extend_from_slice(data);

    let mut ts = Vec::new();
    for (i, chunk) in pes.chunks(TS_PACKET_SIZE - 4).enumerate() {
        ts.extend_from_slice(&build_ts_packet(AAC_PID, i == 0, i as u8, chunk));
    }
    ts
}

// ============================================================
// 测试
// ============================================================

#[test]
fn test_语法遍历元素序列() {
    let au = dual_mono_au(Ics::CODED, Ics::SILENT);
    let header = AdtsHeader::parse(&au).unwrap();
    let elements = scan_raw_data_block(&au[header.payload_offset()..]).unwrap();
    let ids: Vec<_> = elements.iter().map(|e| e.id).collect();
    assert_eq!(
        ids,
        [ElementId::Sce, ElementId::Fil, ElementId::Sce, ElementId::End]
    );
    // 相邻元素的位区间首尾相接
    for pair in elements.windows(2) {
        assert_eq!(pair[0].span.end(), pair[1].span.start);
    }
}

#[test]
fn test_adts_单声道拆分() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut stream = Vec::new();
    for _ in 0..4 {
        stream.extend(dual_mono_au(Ics::CODED, Ics::SILENT));
    }
    assert_eq!(probe(&stream, None), Some(ContainerKind::Adts));

    let mut count = 0;
    for au in split_adts(&stream) {
        let out = transmux(au.unwrap(), TransmuxMode::Mono).unwrap();
        assert!(!out.passthrough);
        assert_eq!(out.primary.unwrap(), expected_mono(0, Ics::CODED));
        assert_eq!(out.secondary.unwrap(), expected_mono(1, Ics::SILENT));
        count += 1;
    }
    assert_eq!(count, 4);
}

#[test]
fn test_adts_立体声复制() {
    let au = dual_mono_au(Ics::SILENT, Ics::CODED);
    let out = transmux(&au, TransmuxMode::Stereo).unwrap();

    let primary = out.primary.unwrap();
    assert_eq!(primary, expected_stereo(0, Ics::SILENT));
    assert_eq!(AdtsHeader::parse(&primary).unwrap().channel_configuration, 2);

    // 副声道仍输出为单声道
    assert_eq!(out.secondary.unwrap(), expected_mono(1, Ics::CODED));

    // 输出的 CPE 可以被再次遍历
    let header = AdtsHeader::parse(&primary).unwrap();
    let elements = scan_raw_data_block(&primary[header.header_len()..]).unwrap();
    let ids: Vec<_> = elements.iter().map(|e| e.id).collect();
    assert_eq!(ids, [ElementId::Cpe, ElementId::End]);
}

#[test]
fn test_ts_完整流程() {
    let mut payload = Vec::new();
    payload.extend(dual_mono_au(Ics::CODED, Ics::SILENT));
    payload.extend(dual_mono_au(Ics::SILENT, Ics::CODED));
    // 普通立体声帧直通
    let stereo = expected_stereo(3, Ics::CODED);
    payload.extend_from_slice(&stereo);

    let mut ts = Vec::new();
    ts.extend_from_slice(&build_pat());
    ts.extend_from_slice(&build_pmt());
    ts.extend(build_pes_packets(180_000, &payload));
    ts.extend(build_pes_packets(
        183_840,
        &dual_mono_au(Ics::CODED, Ics::CODED),
    ));
    assert_eq!(probe(&ts, None), Some(ContainerKind::MpegTs));

    let mut extractor = TsPesExtractor::new();
    // 按不对齐的块喂入
    for chunk in ts.chunks(100) {
        extractor.push(chunk).unwrap();
    }
    extractor.finish();
    assert_eq!(extractor.aac_pid(), Some(AAC_PID));
    assert_eq!(extractor.crc_errors(), 0);

    let mut primary = Vec::new();
    let mut secondary = Vec::new();
    let mut passthrough = 0;
    let mut pts = Vec::new();
    while let Some(pes) = extractor.pop_pes() {
        pts.push(pes.pts);
        for au in split_adts(&pes.payload) {
            let out = transmux(au.unwrap(), TransmuxMode::Mono).unwrap();
            passthrough += usize::from(out.passthrough);
            primary.extend(out.primary.unwrap_or_default());
            secondary.extend(out.secondary.unwrap_or_default());
        }
    }
    assert_eq!(pts, [Some(180_000), Some(183_840)]);
    assert_eq!(passthrough, 1);

    let mut expected_primary = Vec::new();
    expected_primary.extend(expected_mono(0, Ics::CODED));
    expected_primary.extend(expected_mono(0, Ics::SILENT));
    expected_primary.extend_from_slice(&stereo);
    expected_primary.extend(expected_mono(0, Ics::CODED));
    assert_eq!(primary, expected_primary);

    let mut expected_secondary = Vec::new();
    expected_secondary.extend(expected_mono(1, Ics::SILENT));
    expected_secondary.extend(expected_mono(1, Ics::CODED));
    expected_secondary.extend(expected_mono(1, Ics::CODED));
    assert_eq!(secondary, expected_secondary);
}

#[test]
fn test_输出帧长度() {
    for ics in [Ics::SILENT, Ics::CODED] {
        let au = dual_mono_au(ics, ics);
        let out = transmux(&au, TransmuxMode::Mono).unwrap();
        let frame = out.primary.unwrap();
        let header = AdtsHeader::parse(&frame).unwrap();
        assert_eq!(usize::from(header.frame_length), frame.len());
        assert!(header.protection_absent);
        assert_eq!(header.raw_data_blocks, 0);
    }
}
