//! MPEG-TS 中 AAC 基本流的 PES 提取.
//!
//! 以流式方式接收 188 字节的 TS 包, 依次完成:
//! 1. PID 0 上的 PAT: 取第一个非 NIT 节目的 PMT PID
//! 2. PMT: 取第一个 stream_type = 0x0F (ADTS AAC) 的基本流 PID
//! 3. 该 PID 上的 PES 重组, 解析 PTS, 输出完整的 PES 载荷
//!
//! # TS 包结构 (188 字节)
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ 同步字节 (0x47)                    1 byte│
//! │ TEI(1) + PUSI(1) + Priority(1) +         │
//! │   PID(13)                         2 bytes│
//! │ TSC(2) + AFC(2) + CC(4)          1 byte │
//! │ [Adaptation Field]               可变     │
//! │ [Payload]                        可变     │
//! └──────────────────────────────────────────┘
//! ```
//!
//! PSI 段可以跨越多个 TS 包, 重组后用 CRC-32/MPEG-2 校验, 校验失败的段被丢弃.

use std::collections::VecDeque;

use bytes::Bytes;
use dualmono_core::crc::verify_psi_section;
use dualmono_core::{DualMonoError, DualMonoResult};
use log::{debug, trace, warn};

/// TS 包大小
pub const TS_PACKET_SIZE: usize = 188;
/// TS 同步字节
pub const TS_SYNC_BYTE: u8 = 0x47;
/// PAT PID
const PID_PAT: u16 = 0x0000;
/// NIT PID
const PID_NIT: u16 = 0x0010;
/// 空包 PID
const PID_NULL: u16 = 0x1FFF;
/// PAT table_id
const TABLE_ID_PAT: u8 = 0x00;
/// PMT table_id
const TABLE_ID_PMT: u8 = 0x02;
/// ISO/IEC 13818-7 ADTS AAC
pub const STREAM_TYPE_ADTS_AAC: u8 = 0x0F;
/// 段头部 (table_id + section_length) 大小
const SECTION_HEADER_SIZE: usize = 3;
/// 段尾 CRC 大小
const SECTION_CRC_SIZE: usize = 4;

/// 一个完整的 PES 载荷
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PesPacket {
    /// 基本流 PID
    pub pid: u16,
    /// PTS (90kHz 时钟, 33 位)
    pub pts: Option<u64>,
    /// PES 头部之后的数据
    pub payload: Bytes,
}

/// TS 包头部
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TsHeader {
    transport_error: bool,
    pusi: bool,
    pid: u16,
    afc: u8,
}

impl TsHeader {
    fn parse(pkt: &[u8]) -> Self {
        Self {
            transport_error: pkt[1] & 0x80 != 0,
            pusi: pkt[1] & 0x40 != 0,
            pid: (u16::from(pkt[1] & 0x1F) << 8) | u16::from(pkt[2]),
            afc: (pkt[3] >> 4) & 0x03,
        }
    }
}

/// 取出 TS 包的载荷, 跳过 adaptation field
///
/// 无载荷或 adaptation_field_length 越界时返回 None.
fn packet_payload(pkt: &[u8], afc: u8) -> Option<&[u8]> {
    let mut offset = 4;
    if afc == 2 || afc == 3 {
        let af_len = usize::from(pkt[offset]);
        offset += 1 + af_len;
    }
    if (afc == 1 || afc == 3) && offset <= pkt.len() {
        Some(&pkt[offset..])
    } else {
        None
    }
}

/// 段长度 (含 3 字节段头部)
fn section_total_len(section: &[u8]) -> usize {
    SECTION_HEADER_SIZE + ((usize::from(section[1] & 0x0F) << 8) | usize::from(section[2]))
}

/// PSI 段重组缓冲区
#[derive(Debug, Default)]
struct SectionBuffer {
    data: Vec<u8>,
}

impl SectionBuffer {
    /// 送入一个 TS 包载荷, 返回其中完成的所有段
    fn push(&mut self, payload: &[u8], pusi: bool) -> Vec<Vec<u8>> {
        let mut sections = Vec::new();
        if pusi {
            let Some((&pointer, rest)) = payload.split_first() else {
                return sections;
            };
            let pointer = usize::from(pointer);
            if pointer > rest.len() {
                warn!("TS PSI: pointer_field={} 越界", pointer);
                self.data.clear();
                return sections;
            }
            // pointer_field 之前的字节属于上一个段
            if !self.data.is_empty() {
                self.data.extend_from_slice(&rest[..pointer]);
                self.drain(&mut sections);
            }
            self.data.clear();
            self.data.extend_from_slice(&rest[pointer..]);
        } else if !self.data.is_empty() {
            self.data.extend_from_slice(payload);
        }
        self.drain(&mut sections);
        sections
    }

    fn drain(&mut self, sections: &mut Vec<Vec<u8>>) {
        loop {
            // 0xFF 为段后填充
            if self.data.first().is_none_or(|&b| b == 0xFF) {
                self.data.clear();
                return;
            }
            if self.data.len() < SECTION_HEADER_SIZE {
                return;
            }
            let total = section_total_len(&self.data);
            if self.data.len() < total {
                return;
            }
            sections.push(self.data.drain(..total).collect());
        }
    }
}

/// PES 重组缓冲区
#[derive(Debug, Default)]
struct PesBuffer {
    data: Vec<u8>,
    pts: Option<u64>,
    /// PES_packet_length 给出的载荷长度 (None 表示未指定)
    expected_len: Option<usize>,
    active: bool,
}

impl PesBuffer {
    fn take(&mut self, pid: u16) -> Option<PesPacket> {
        if !self.active {
            return None;
        }
        self.active = false;
        let pts = self.pts.take();
        let mut data = std::mem::take(&mut self.data);
        if let Some(expected) = self.expected_len.take() {
            data.truncate(expected);
        }
        if data.is_empty() {
            return None;
        }
        Some(PesPacket {
            pid,
            pts,
            payload: Bytes::from(data),
        })
    }

    fn is_complete(&self) -> bool {
        self.expected_len
            .is_some_and(|expected| self.data.len() >= expected)
    }
}

/// PES 头部解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PesHeader {
    pts: Option<u64>,
    /// 头部长度 (字节)
    header_len: usize,
    /// 头部之后的载荷长度 (PES_packet_length = 0 时为 None)
    payload_len: Option<usize>,
}

/// 解析 PES 包头, 提取 PTS
fn parse_pes_header(data: &[u8]) -> Option<PesHeader> {
    // PES start code: 00 00 01 + stream_id
    if data.len() < 9 || data[0] != 0x00 || data[1] != 0x00 || data[2] != 0x01 {
        return None;
    }

    let pes_length = (usize::from(data[4]) << 8) | usize::from(data[5]);

    // data[6]: 10xxxxxx (marker bits)
    if (data[6] & 0xC0) != 0x80 {
        return Some(PesHeader {
            pts: None,
            header_len: 6,
            payload_len: (pes_length > 0).then_some(pes_length),
        });
    }

    let pts_dts_flags = (data[7] >> 6) & 0x03;
    let header_len = 9 + usize::from(data[8]);
    if header_len > data.len() {
        return None;
    }

    let pts = if pts_dts_flags >= 2 && data.len() >= 14 {
        Some(parse_timestamp(&data[9..14]))
    } else {
        None
    };

    let payload_len = (pes_length > 0).then(|| pes_length.saturating_sub(header_len - 6));
    Some(PesHeader {
        pts,
        header_len,
        payload_len,
    })
}

/// 从 5 字节中提取 33-bit 时间戳
fn parse_timestamp(data: &[u8]) -> u64 {
    let b0 = u64::from(data[0]);
    let b1 = u64::from(data[1]);
    let b2 = u64::from(data[2]);
    let b3 = u64::from(data[3]);
    let b4 = u64::from(data[4]);

    ((b0 >> 1) & 0x07) << 30 | b1 << 22 | (b2 >> 1) << 15 | b3 << 7 | b4 >> 1
}

/// AAC PES 提取器
#[derive(Debug, Default)]
pub struct TsPesExtractor {
    /// 指定的 AAC PID (不从 PMT 发现)
    forced_pid: Option<u16>,
    pmt_pid: Option<u16>,
    aac_pid: Option<u16>,
    pat_sections: SectionBuffer,
    pmt_sections: SectionBuffer,
    pes: PesBuffer,
    /// 已完成的 PES 队列
    queue: VecDeque<PesPacket>,
    /// 未满一个 TS 包的输入字节
    pending: Vec<u8>,
    packets: u64,
    skipped_bytes: usize,
    crc_errors: usize,
}

impl TsPesExtractor {
    /// 创建提取器, AAC PID 从 PAT/PMT 发现
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建提取器, 直接使用指定的 AAC PID
    pub fn with_pid(pid: u16) -> Self {
        Self {
            forced_pid: Some(pid),
            aac_pid: Some(pid),
            ..Self::default()
        }
    }

    /// PAT 中发现的 PMT PID
    pub fn pmt_pid(&self) -> Option<u16> {
        self.pmt_pid
    }

    /// 当前使用的 AAC PID
    pub fn aac_pid(&self) -> Option<u16> {
        self.aac_pid
    }

    /// 已处理的 TS 包数
    pub fn packets(&self) -> u64 {
        self.packets
    }

    /// 为寻找同步字节而丢弃的字节数
    pub fn skipped_bytes(&self) -> usize {
        self.skipped_bytes
    }

    /// CRC 校验失败的 PSI 段数
    pub fn crc_errors(&self) -> usize {
        self.crc_errors
    }

    /// 取出下一个完整的 PES
    pub fn pop_pes(&mut self) -> Option<PesPacket> {
        self.queue.pop_front()
    }

    /// 送入任意长度的字节流, 内部按 188 字节重新切包
    pub fn push(&mut self, chunk: &[u8]) -> DualMonoResult<()> {
        let mut pending = std::mem::take(&mut self.pending);
        pending.extend_from_slice(chunk);

        let mut start = 0;
        while let Some(offset) = find_sync(&pending[start..]) {
            if offset > 0 {
                debug!("TS: 重新同步, 跳过 {} 字节", offset);
                self.skipped_bytes += offset;
                start += offset;
            }
            if pending.len() - start < TS_PACKET_SIZE {
                break;
            }
            self.push_packet(&pending[start..start + TS_PACKET_SIZE])?;
            start += TS_PACKET_SIZE;
        }
        if find_sync(&pending[start..]).is_none() {
            // 剩余数据中没有同步字节
            self.skipped_bytes += pending.len() - start;
            start = pending.len();
        }

        pending.drain(..start);
        self.pending = pending;
        Ok(())
    }

    /// 送入一个完整的 188 字节 TS 包
    pub fn push_packet(&mut self, pkt: &[u8]) -> DualMonoResult<()> {
        if pkt.len() != TS_PACKET_SIZE {
            return Err(DualMonoError::InvalidData(format!(
                "TS: 包长度 {} != {}",
                pkt.len(),
                TS_PACKET_SIZE
            )));
        }
        if pkt[0] != TS_SYNC_BYTE {
            return Err(DualMonoError::InvalidData("TS: 同步字节不匹配".into()));
        }
        self.packets += 1;

        let header = TsHeader::parse(pkt);
        if header.pid == PID_NULL {
            return Ok(());
        }
        if header.transport_error {
            debug!("TS: PID={:#06X} 传输错误标志置位, 丢弃", header.pid);
            return Ok(());
        }
        let Some(payload) = packet_payload(pkt, header.afc) else {
            return Ok(());
        };

        if header.pid == PID_PAT {
            for section in self.pat_sections.push(payload, header.pusi) {
                self.handle_pat(&section);
            }
        } else if Some(header.pid) == self.aac_pid {
            self.handle_pes(header.pid, payload, header.pusi);
        } else if Some(header.pid) == self.pmt_pid {
            for section in self.pmt_sections.push(payload, header.pusi) {
                self.handle_pmt(&section);
            }
        }
        Ok(())
    }

    /// 输入结束, 输出最后一个未完成的 PES
    pub fn finish(&mut self) {
        if let Some(pid) = self.aac_pid
            && let Some(pes) = self.pes.take(pid)
        {
            self.queue.push_back(pes);
        }
        if !self.pending.is_empty() {
            debug!("TS: 末尾 {} 字节不足一个包, 丢弃", self.pending.len());
            self.skipped_bytes += self.pending.len();
            self.pending.clear();
        }
    }

    fn verify(&mut self, section: &[u8], name: &str) -> bool {
        if verify_psi_section(section) {
            return true;
        }
        self.crc_errors += 1;
        warn!("TS {}: CRC 校验失败, 丢弃段", name);
        false
    }

    /// 解析 PAT (Program Association Table)
    fn handle_pat(&mut self, section: &[u8]) {
        if section[0] != TABLE_ID_PAT || section.len() < 12 || !self.verify(section, "PAT") {
            return;
        }
        if self.pmt_pid.is_some() {
            return;
        }

        // 跳过 transport_stream_id(2) + version/flags(1) + section_number(1) + last_section(1)
        let entries = &section[8..section.len() - SECTION_CRC_SIZE];
        // 每个条目 4 字节: program_number(2) + PID(2)
        for chunk in entries.chunks_exact(4) {
            let program_number = (u16::from(chunk[0]) << 8) | u16::from(chunk[1]);
            let pid = (u16::from(chunk[2] & 0x1F) << 8) | u16::from(chunk[3]);
            if program_number == 0 || pid == PID_NIT {
                continue;
            }
            debug!("TS PAT: program={} PMT_PID={:#06X}", program_number, pid);
            self.pmt_pid = Some(pid);
            break;
        }
    }

    /// 解析 PMT (Program Map Table)
    fn handle_pmt(&mut self, section: &[u8]) {
        if section[0] != TABLE_ID_PMT || section.len() < 16 || !self.verify(section, "PMT") {
            return;
        }

        let prog_info_len = (usize::from(section[10] & 0x0F) << 8) | usize::from(section[11]);
        let mut pos = 12 + prog_info_len;
        let end = section.len() - SECTION_CRC_SIZE;

        while pos + 5 <= end {
            let stream_type = section[pos];
            let es_pid = (u16::from(section[pos + 1] & 0x1F) << 8) | u16::from(section[pos + 2]);
            let es_info_len =
                (usize::from(section[pos + 3] & 0x0F) << 8) | usize::from(section[pos + 4]);
            trace!("TS PMT: stream_type=0x{:02X} PID={:#06X}", stream_type, es_pid);

            if stream_type == STREAM_TYPE_ADTS_AAC
                && self.forced_pid.is_none()
                && self.aac_pid.is_none()
            {
                debug!("TS PMT: ADTS AAC PID={:#06X}", es_pid);
                self.aac_pid = Some(es_pid);
            }
            pos += 5 + es_info_len;
        }
    }

    /// 处理 AAC PID 上的 PES 数据
    fn handle_pes(&mut self, pid: u16, payload: &[u8], pusi: bool) {
        if pusi {
            // Payload Unit Start: 先输出旧数据, 再开始新 PES
            if let Some(pes) = self.pes.take(pid) {
                self.queue.push_back(pes);
            }
            let Some(header) = parse_pes_header(payload) else {
                warn!("TS: PID={:#06X} PES 头部无效, 丢弃至下一个起始包", pid);
                return;
            };
            self.pes.active = true;
            self.pes.pts = header.pts;
            self.pes.expected_len = header.payload_len;
            self.pes.data.extend_from_slice(&payload[header.header_len..]);
        } else if self.pes.active {
            self.pes.data.extend_from_slice(payload);
        } else {
            return;
        }

        if self.pes.is_complete()
            && let Some(pes) = self.pes.take(pid)
        {
            self.queue.push_back(pes);
        }
    }
}

/// 查找可信的同步字节: 0x47 且 188 字节之后仍为 0x47 (或数据不足以验证)
fn find_sync(data: &[u8]) -> Option<usize> {
    (0..data.len()).find(|&i| {
        data[i] == TS_SYNC_BYTE
            && data
                .get(i + TS_PACKET_SIZE)
                .is_none_or(|&next| next == TS_SYNC_BYTE)
    })
}

/// 探测数据是否为 TS: 前 1024 字节内存在相隔 188 字节的两个同步字节
pub fn probe_ts(data: &[u8]) -> bool {
    (0..data.len().min(1024)).any(|i| {
        data[i] == TS_SYNC_BYTE && data.get(i + TS_PACKET_SIZE) == Some(&TS_SYNC_BYTE)
    })
}
