//! 访问单元处理: 输入读取, 转封装, 输出写入与统计.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, bail};
use dualmono_codec::{TransmuxMode, transmux};
use dualmono_format::{ContainerKind, TsPesExtractor, split_adts};
use serde::Serialize;
use tracing::{debug, info, warn};

/// TS 输入每次读取的字节数 (1024 个包)
const TS_READ_CHUNK: usize = 188 * 1024;

/// 一次运行的统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct RunSummary {
    pub input: String,
    pub container: String,
    pub mode: String,
    /// 处理的 ADTS 访问单元数
    pub access_units: u64,
    /// 非双单声道, 原样写入主输出的访问单元数
    pub passthrough: u64,
    pub primary_frames: u64,
    pub secondary_frames: u64,
    /// 被丢弃的访问单元数
    pub errors: u64,
    /// 为重新同步而跳过的字节数
    pub skipped_bytes: u64,
    pub pes_packets: u64,
    /// CRC 校验失败而被丢弃的 PSI 段数
    pub psi_crc_errors: u64,
    pub duration_ms: u64,
}

/// 输出目标
pub(crate) struct Outputs {
    primary: Box<dyn Write>,
    secondary: Option<Box<dyn Write>>,
}

impl Outputs {
    pub(crate) fn new(primary: Box<dyn Write>, secondary: Option<Box<dyn Write>>) -> Self {
        Self { primary, secondary }
    }

    /// 创建输出文件, 已存在且未指定覆盖时报错
    pub(crate) fn create(
        primary: &Path,
        secondary: Option<&Path>,
        overwrite: bool,
    ) -> anyhow::Result<Self> {
        let primary = create_output(primary, overwrite)?;
        let secondary = secondary
            .map(|path| create_output(path, overwrite))
            .transpose()?;
        Ok(Self::new(primary, secondary))
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.primary.flush().context("刷新主输出失败")?;
        if let Some(secondary) = self.secondary.as_mut() {
            secondary.flush().context("刷新副输出失败")?;
        }
        Ok(())
    }
}

fn create_output(path: &Path, overwrite: bool) -> anyhow::Result<Box<dyn Write>> {
    if !overwrite && path.exists() {
        bail!("输出文件已存在 '{}', 使用 -y 覆盖", path.display());
    }
    let file = File::create(path)
        .with_context(|| format!("无法创建输出文件 '{}'", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// 转封装处理器
pub(crate) struct Processor {
    mode: TransmuxMode,
    strict: bool,
    outputs: Outputs,
    summary: RunSummary,
}

impl Processor {
    pub(crate) fn new(mode: TransmuxMode, strict: bool, outputs: Outputs) -> Self {
        Self {
            mode,
            strict,
            outputs,
            summary: RunSummary {
                mode: mode.to_string(),
                ..RunSummary::default()
            },
        }
    }

    /// 处理整个输入, 返回统计
    pub(crate) fn run(
        mut self,
        input: &mut dyn Read,
        container: ContainerKind,
        forced_pid: Option<u16>,
    ) -> anyhow::Result<RunSummary> {
        let start = Instant::now();
        self.summary.container = container.to_string();

        match container {
            ContainerKind::MpegTs => self.process_ts(input, forced_pid)?,
            ContainerKind::Adts => {
                let mut data = Vec::new();
                input.read_to_end(&mut data).context("读取输入失败")?;
                self.process_adts(&data)?;
            }
        }
        self.outputs.flush()?;

        self.summary.duration_ms = start.elapsed().as_millis() as u64;
        Ok(self.summary)
    }

    fn process_ts(&mut self, input: &mut dyn Read, forced_pid: Option<u16>) -> anyhow::Result<()> {
        let mut extractor = forced_pid.map_or_else(TsPesExtractor::new, TsPesExtractor::with_pid);
        let mut buf = vec![0u8; TS_READ_CHUNK];
        let mut reported_pid = None;

        loop {
            let n = input.read(&mut buf).context("读取输入失败")?;
            if n == 0 {
                extractor.finish();
            } else {
                extractor.push(&buf[..n])?;
            }

            if reported_pid != extractor.aac_pid() {
                reported_pid = extractor.aac_pid();
                if let Some(pid) = reported_pid {
                    info!("AAC PID: {:#06X}", pid);
                }
            }

            while let Some(pes) = extractor.pop_pes() {
                self.summary.pes_packets += 1;
                debug!(
                    "PES #{}: pts={:?}, {} 字节",
                    self.summary.pes_packets,
                    pes.pts,
                    pes.payload.len()
                );
                self.process_adts(&pes.payload)?;
            }

            if n == 0 {
                break;
            }
        }

        if extractor.aac_pid().is_none() {
            warn!("未找到 ADTS AAC 基本流 (stream_type 0x0F), 可用 --pid 指定");
        }
        if extractor.crc_errors() > 0 {
            warn!("{} 个 PSI 段 CRC 校验失败", extractor.crc_errors());
        }
        self.summary.skipped_bytes += extractor.skipped_bytes() as u64;
        self.summary.psi_crc_errors += extractor.crc_errors() as u64;
        Ok(())
    }

    /// 处理一段 ADTS 字节流 (整个文件或一个 PES 载荷)
    fn process_adts(&mut self, data: &[u8]) -> anyhow::Result<()> {
        let mut splitter = split_adts(data);
        for frame in splitter.by_ref() {
            match frame {
                Ok(au) => self.process_access_unit(au)?,
                Err(e) => {
                    self.summary.errors += 1;
                    if self.strict {
                        return Err(e).context("ADTS 帧切分失败");
                    }
                    warn!("ADTS 帧切分失败, 丢弃: {}", e);
                }
            }
        }
        self.summary.skipped_bytes += splitter.skipped_bytes() as u64;
        Ok(())
    }

    /// 转封装一个访问单元并写出结果
    pub(crate) fn process_access_unit(&mut self, au: &[u8]) -> anyhow::Result<()> {
        self.summary.access_units += 1;
        let index = self.summary.access_units;

        let output = match transmux(au, self.mode) {
            Ok(output) => output,
            Err(e) => {
                self.summary.errors += 1;
                if self.strict {
                    return Err(e).with_context(|| format!("访问单元 #{index} 转封装失败"));
                }
                warn!("访问单元 #{} 转封装失败, 丢弃: {}", index, e);
                return Ok(());
            }
        };

        if output.passthrough {
            self.summary.passthrough += 1;
        }
        if let Some(primary) = &output.primary {
            self.outputs
                .primary
                .write_all(primary)
                .context("写入主输出失败")?;
            self.summary.primary_frames += 1;
        }
        if let Some(secondary) = &output.secondary {
            if let Some(writer) = self.outputs.secondary.as_mut() {
                writer.write_all(secondary).context("写入副输出失败")?;
            }
            self.summary.secondary_frames += 1;
        }
        Ok(())
    }
}

/// 输出 JSON 统计, `-` 表示 stdout
pub(crate) fn write_report(summary: &RunSummary, target: &str) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary).context("序列化统计失败")?;
    if target == "-" {
        println!("{json}");
    } else {
        std::fs::write(target, json + "\n")
            .with_context(|| format!("写入统计文件 '{target}' 失败"))?;
    }
    Ok(())
}
