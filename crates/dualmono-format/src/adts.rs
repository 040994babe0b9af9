//! ADTS 字节流切分.
//!
//! 在原始 `.aac` 文件或 PES 载荷中按同步字定位 ADTS 帧, 逐帧返回完整的访问单元.
//! 同步丢失时逐字节重新搜索, 并统计跳过的字节数.

use dualmono_codec::adts::{ADTS_HEADER_SIZE, AdtsHeader};
use dualmono_core::{DualMonoError, DualMonoResult};
use log::{debug, warn};

/// 检查 `data` 开头是否为 ADTS 同步字 (0xFFF) 且 layer = 0
pub fn is_adts_sync(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0xFF && (data[1] & 0xF6) == 0xF0
}

/// ID3v2 标签总长度 (不是 ID3v2 时为 0)
pub fn id3v2_len(data: &[u8]) -> usize {
    if data.len() < 10 || &data[..3] != b"ID3" {
        return 0;
    }
    // Syncsafe integer (4 bytes)
    let size = (usize::from(data[6] & 0x7F) << 21)
        | (usize::from(data[7] & 0x7F) << 14)
        | (usize::from(data[8] & 0x7F) << 7)
        | usize::from(data[9] & 0x7F);
    10 + size
}

/// `data[0]` 之后是否还有可用的帧头部 (同步字且 frame_length 不小于头部长度)
fn has_later_sync(data: &[u8]) -> bool {
    (1..data.len()).any(|i| {
        let rest = &data[i..];
        is_adts_sync(rest)
            && AdtsHeader::parse(rest)
                .is_ok_and(|h| usize::from(h.frame_length) >= h.header_len())
    })
}

/// ADTS 帧切分器
///
/// 作为迭代器逐帧产出 `&[u8]` (含头部与 CRC). 最后一帧不完整时产出一次
/// `Exhausted` 错误后结束.
#[derive(Debug, Clone)]
pub struct AdtsSplitter<'a> {
    data: &'a [u8],
    pos: usize,
    skipped: usize,
    frames: usize,
    done: bool,
}

impl<'a> AdtsSplitter<'a> {
    /// 创建切分器, 开头的 ID3v2 标签会被跳过 (不计入跳过字节数)
    pub fn new(data: &'a [u8]) -> Self {
        let id3 = id3v2_len(data).min(data.len());
        if id3 > 0 {
            debug!("ADTS: 跳过 ID3v2 标签, 大小={}", id3);
        }
        Self {
            data,
            pos: id3,
            skipped: 0,
            frames: 0,
            done: false,
        }
    }

    /// 为重新同步而跳过的字节数
    pub fn skipped_bytes(&self) -> usize {
        self.skipped
    }

    /// 已产出的完整帧数
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// 当前字节位置
    pub fn position(&self) -> usize {
        self.pos
    }

    /// 从当前位置起查找可用的帧头部
    ///
    /// 返回 Ok(None) 表示数据已用完.
    fn find_frame(&mut self) -> DualMonoResult<Option<AdtsHeader>> {
        let start = self.pos;
        loop {
            let rest = &self.data[self.pos..];
            if rest.len() < 2 {
                self.skip(rest.len(), start);
                return Ok(None);
            }
            if is_adts_sync(rest) {
                if rest.len() < ADTS_HEADER_SIZE {
                    return Err(DualMonoError::exhausted(
                        ADTS_HEADER_SIZE * 8,
                        rest.len() * 8,
                    ));
                }
                let header = AdtsHeader::parse(rest)?;
                let frame_length = usize::from(header.frame_length);
                // 超出剩余数据的帧只有在其后再无同步字时才视为末尾截断
                if frame_length >= header.header_len()
                    && (frame_length <= rest.len() || !has_later_sync(rest))
                {
                    self.report_resync(start);
                    return Ok(Some(header));
                }
            }
            self.pos += 1;
            self.skipped += 1;
        }
    }

    fn skip(&mut self, n: usize, resync_start: usize) {
        self.pos += n;
        self.skipped += n;
        self.report_resync(resync_start);
    }

    fn report_resync(&self, start: usize) {
        if self.pos > start {
            warn!(
                "ADTS: 同步丢失, 在偏移 {} 处跳过 {} 字节",
                start,
                self.pos - start
            );
        }
    }
}

impl<'a> Iterator for AdtsSplitter<'a> {
    type Item = DualMonoResult<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let header = match self.find_frame() {
            Ok(Some(header)) => header,
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        let frame_length = usize::from(header.frame_length);
        let rest = &self.data[self.pos..];
        if frame_length > rest.len() {
            self.done = true;
            debug!(
                "ADTS: 末尾帧不完整, frame_length={}, 剩余 {} 字节",
                frame_length,
                rest.len()
            );
            return Some(Err(DualMonoError::exhausted(
                frame_length * 8,
                rest.len() * 8,
            )));
        }

        let frame = &rest[..frame_length];
        self.pos += frame_length;
        self.frames += 1;
        Some(Ok(frame))
    }
}

/// 切分 ADTS 字节流
pub fn split_adts(data: &[u8]) -> AdtsSplitter<'_> {
    AdtsSplitter::new(data)
}

/// 帧头部之后的有效载荷 (跳过 CRC)
pub fn frame_payload(frame: &[u8]) -> DualMonoResult<&[u8]> {
    let header = AdtsHeader::parse(frame)?;
    let begin = header.header_len();
    let end = usize::from(header.frame_length).min(frame.len());
    if end < begin {
        return Err(DualMonoError::InvalidData(format!(
            "ADTS: frame_length={} 小于头部长度 {}",
            end, begin
        )));
    }
    Ok(&frame[begin..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 构造 channel_configuration=0 的 ADTS 帧, 载荷为给定字节
    fn build_frame(payload: &[u8]) -> Vec<u8> {
        AdtsHeader::default().build_frame(0, payload).unwrap()
    }

    #[test]
    fn test_连续帧切分() {
        let mut data = Vec::new();
        for i in 0..5u8 {
            data.extend(build_frame(&vec![i; 10 + usize::from(i)]));
        }

        let mut splitter = split_adts(&data);
        let frames: Vec<_> = splitter.by_ref().map(|f| f.unwrap()).collect();
        assert_eq!(frames.len(), 5);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.len(), 7 + 10 + i);
            assert_eq!(frame_payload(frame).unwrap(), &vec![i as u8; 10 + i][..]);
        }
        assert_eq!(splitter.skipped_bytes(), 0);
        assert_eq!(splitter.frames(), 5);
    }

    #[test]
    fn test_跳过垃圾数据重新同步() {
        let mut data = vec![0x00, 0x12, 0xFF, 0x00, 0x34];
        data.extend(build_frame(&[0xAA; 8]));
        data.extend_from_slice(&[0x55; 3]);
        data.extend(build_frame(&[0xBB; 4]));

        let mut splitter = split_adts(&data);
        let frames: Vec<_> = splitter.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].len(), 15);
        assert_eq!(frames[1].len(), 11);
        assert_eq!(splitter.skipped_bytes(), 8);
    }

    #[test]
    fn test_frame_length_过小视为伪同步() {
        // 同步字正确但 frame_length=3
        let mut data = vec![0xFF, 0xF1, 0x4C, 0x00, 0x00, 0x7F, 0xFC];
        data.extend(build_frame(&[1, 2, 3]));
        let frames: Vec<_> = split_adts(&data).collect::<Result<_, _>>().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 10);
    }

    #[test]
    fn test_超长伪同步不截断后续帧() {
        let mut data = build_frame(&[0x01; 12]);
        // 同步字正确, frame_length 接近 8191, 远超剩余数据
        data.extend_from_slice(&[0xFF, 0xF1, 0x4C, 0x03, 0xFF, 0xE0, 0x00]);
        for i in 0..5u8 {
            data.extend(build_frame(&[i; 9]));
        }

        let mut splitter = split_adts(&data);
        let frames: Vec<_> = splitter.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[0].len(), 19);
        for (i, frame) in frames[1..].iter().enumerate() {
            assert_eq!(frame_payload(frame).unwrap(), &[i as u8; 9][..]);
        }
        assert_eq!(splitter.skipped_bytes(), 7);
    }

    #[test]
    fn test_末尾伪同步仍报截断() {
        let mut data = build_frame(&[0x01; 4]);
        data.extend_from_slice(&[0xFF, 0xF1, 0x4C, 0x03, 0xFF, 0xE0, 0x00, 0x12, 0x34]);
        let results: Vec<_> = split_adts(&data).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(DualMonoError::Exhausted { .. })));
    }

    #[test]
    fn test_末尾帧不完整() {
        let mut data = build_frame(&[0x11; 6]);
        let second = build_frame(&[0x22; 20]);
        data.extend_from_slice(&second[..12]);

        let mut splitter = split_adts(&data);
        assert!(splitter.next().unwrap().is_ok());
        assert!(matches!(
            splitter.next(),
            Some(Err(DualMonoError::Exhausted { .. }))
        ));
        assert!(splitter.next().is_none());
    }

    #[test]
    fn test_末尾头部不完整() {
        let mut data = build_frame(&[0x11; 6]);
        data.extend_from_slice(&[0xFF, 0xF1, 0x4C]);
        let results: Vec<_> = split_adts(&data).collect();
        assert_eq!(results.len(), 2);
        assert!(matches!(results[1], Err(DualMonoError::Exhausted { .. })));
    }

    #[test]
    fn test_id3v2_跳过() {
        let mut data = b"ID3\x04\x00\x00\x00\x00\x00\x05".to_vec();
        data.extend_from_slice(&[0xFF; 5]);
        data.extend(build_frame(&[9; 9]));

        let mut splitter = split_adts(&data);
        let frames: Vec<_> = splitter.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(splitter.skipped_bytes(), 0);
        assert_eq!(id3v2_len(&data), 15);
    }

    #[test]
    fn test_空输入与纯垃圾() {
        assert!(split_adts(&[]).next().is_none());

        let garbage = [0x47u8; 100];
        let mut splitter = split_adts(&garbage);
        assert!(splitter.next().is_none());
        assert_eq!(splitter.skipped_bytes(), 100);
    }

    #[test]
    fn test_同步字检查() {
        assert!(is_adts_sync(&[0xFF, 0xF1]));
        assert!(is_adts_sync(&[0xFF, 0xF9]));
        // layer != 0
        assert!(!is_adts_sync(&[0xFF, 0xF3]));
        assert!(!is_adts_sync(&[0xFF, 0xE1]));
        assert!(!is_adts_sync(&[0xFF]));
    }
}
