//! dualmono - 双单声道 AAC 转封装命令行工具
//!
//! 从 MPEG-TS 或 ADTS 输入中取出 AAC 访问单元, 把 channel_configuration=0 的
//! 双单声道帧拆分为两路单声道, 或把单个声道复制为立体声.

mod logging;
mod processor;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

use dualmono_codec::TransmuxMode;
use dualmono_format::{ContainerKind, probe};

use processor::{Outputs, Processor, RunSummary, write_report};

/// 容器探测读取的字节数
const PROBE_SIZE: usize = 4096;

/// 转封装模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Mode {
    /// 主声道 / 副声道各自输出为单声道
    #[default]
    Mono,
    /// 主声道复制为立体声
    Stereo,
}

impl From<Mode> for TransmuxMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mono => TransmuxMode::Mono,
            Mode::Stereo => TransmuxMode::Stereo,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dualmono", version, about = "双单声道 AAC 转封装工具")]
struct Cli {
    /// 输入文件路径 (MPEG-TS 或 ADTS)
    #[arg(short, long)]
    input: PathBuf,

    /// 主声道输出 (ADTS)
    #[arg(short, long)]
    output: PathBuf,

    /// 副声道输出 (ADTS)
    #[arg(short, long)]
    secondary: Option<PathBuf>,

    /// 转封装模式
    #[arg(short, long, value_enum, default_value_t = Mode::Mono)]
    mode: Mode,

    /// 指定 AAC 基本流 PID, 不依赖 PMT
    #[arg(long, value_parser = parse_pid)]
    pid: Option<u16>,

    /// 遇到错误的访问单元时中止
    #[arg(long)]
    strict: bool,

    /// 输出 JSON 统计 ("-" 表示 stdout)
    #[arg(long, value_name = "PATH")]
    report: Option<String>,

    /// 覆盖输出文件
    #[arg(short = 'y', long)]
    overwrite: bool,

    /// 日志级别 (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// 解析 PID, 支持十进制与 0x 前缀十六进制
fn parse_pid(s: &str) -> Result<u16, String> {
    let pid = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    }
    .map_err(|e| format!("无效的 PID '{s}': {e}"))?;
    if pid > 0x1FFF {
        return Err(format!("PID 超出范围: {pid:#X}"));
    }
    Ok(pid)
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init("dualmono-cli", cli.verbose) {
        eprintln!("警告: 日志初始化失败: {e:#}");
    }

    if let Err(e) = run(&cli) {
        eprintln!("错误: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.secondary.as_deref() == Some(cli.output.as_path()) {
        bail!("主输出与副输出不能是同一文件");
    }

    info!(
        "dualmono 版本 {}, 输入: {}, 模式: {}",
        env!("CARGO_PKG_VERSION"),
        cli.input.display(),
        TransmuxMode::from(cli.mode)
    );

    let mut reader = BufReader::new(
        File::open(&cli.input)
            .with_context(|| format!("无法打开输入文件 '{}'", cli.input.display()))?,
    );
    let (head, container) = detect_container(&mut reader, &cli.input)?;
    info!("容器: {}", container);
    if cli.pid.is_some() && container != ContainerKind::MpegTs {
        tracing::warn!("--pid 仅对 MPEG-TS 输入有效, 已忽略");
    }

    let outputs = Outputs::create(&cli.output, cli.secondary.as_deref(), cli.overwrite)?;
    let processor = Processor::new(cli.mode.into(), cli.strict, outputs);

    // 探测读取的字节重新拼回输入流
    let mut input = head.as_slice().chain(reader);
    let mut summary = processor.run(&mut input, container, cli.pid)?;
    summary.input = cli.input.display().to_string();

    log_summary(&summary);
    if let Some(target) = &cli.report {
        write_report(&summary, target)?;
    }
    Ok(())
}

/// 读取输入开头并判断容器类型
fn detect_container(reader: &mut impl Read, path: &Path) -> anyhow::Result<(Vec<u8>, ContainerKind)> {
    let mut head = Vec::with_capacity(PROBE_SIZE);
    reader
        .by_ref()
        .take(PROBE_SIZE as u64)
        .read_to_end(&mut head)
        .context("读取输入失败")?;

    let container = probe(&head, Some(path))
        .with_context(|| format!("无法识别输入格式 '{}'", path.display()))?;
    Ok((head, container))
}

fn log_summary(summary: &RunSummary) {
    info!(
        "完成: 访问单元 {}, 直通 {}, 主输出 {} 帧, 副输出 {} 帧, 错误 {}, 跳过 {} 字节, 耗时 {} ms",
        summary.access_units,
        summary.passthrough,
        summary.primary_frames,
        summary.secondary_frames,
        summary.errors,
        summary.skipped_bytes,
        summary.duration_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_参数解析() {
        let cli = Cli::try_parse_from([
            "dualmono", "-i", "in.ts", "-o", "main.aac", "-s", "sub.aac", "--pid", "0x101",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("in.ts"));
        assert_eq!(cli.secondary, Some(PathBuf::from("sub.aac")));
        assert_eq!(cli.mode, Mode::Mono);
        assert_eq!(cli.pid, Some(0x101));
        assert!(!cli.strict);

        let cli = Cli::try_parse_from([
            "dualmono", "-i", "in.aac", "-o", "out.aac", "-m", "stereo", "--strict", "-vv",
        ])
        .unwrap();
        assert_eq!(TransmuxMode::from(cli.mode), TransmuxMode::Stereo);
        assert!(cli.strict);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_缺少必需参数() {
        assert!(Cli::try_parse_from(["dualmono", "-i", "in.ts"]).is_err());
        assert!(Cli::try_parse_from(["dualmono", "-i", "a", "-o", "b", "-m", "quad"]).is_err());
    }

    #[test]
    fn test_pid_解析() {
        assert_eq!(parse_pid("256"), Ok(256));
        assert_eq!(parse_pid("0X1FFF"), Ok(0x1FFF));
        assert!(parse_pid("0x2000").is_err());
        assert!(parse_pid("abc").is_err());
    }

    #[test]
    fn test_容器探测() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.bin");
        let mut data = vec![0xFF, 0xF1, 0x50, 0x00, 0x01, 0x1F, 0xFC];
        data.extend_from_slice(&[0u8; 16]);

        let (head, kind) = detect_container(&mut data.as_slice(), &path).unwrap();
        assert_eq!(kind, ContainerKind::Adts);
        assert_eq!(head, data);

        assert!(detect_container(&mut [0u8; 32].as_slice(), &path).is_err());
    }
}
