//! 日志初始化模块.
//!
//! 双输出:
//! - console: 彩色, 输出到 stderr (stdout 留给 `--report -`), 默认 info, -v 提升为 debug
//! - file: 无色, 带 target, 默认 info, 可通过 -v/-vv 或 DUALMONO_LOG 环境变量调整
//!
//! 日志文件输出到 $cwd/logs/{prefix}.{date}.log. 库 crate 通过 `log` 宏输出的记录
//! 经 tracing-log 桥接进入同一订阅器.

use anyhow::Context;
use chrono::Local;
use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, FormatEvent, FormatFields, format::Writer},
    layer::{Layer, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// 文件日志级别覆盖的环境变量
const LOG_ENV: &str = "DUALMONO_LOG";
/// 日志目录
const LOG_DIR: &str = "logs";

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// -v 计数对应的 (console, file) 级别
fn levels(verbosity: u8) -> (Level, Level) {
    match verbosity {
        0 => (Level::INFO, Level::INFO),
        1 => (Level::DEBUG, Level::DEBUG),
        _ => (Level::DEBUG, Level::TRACE),
    }
}

/// 初始化日志系统
///
/// - `file_prefix`: 日志文件前缀 (如 "dualmono-cli")
/// - `verbosity`: 0=info, 1=debug, 2+=trace (由 -v/-vv 控制)
pub fn init(file_prefix: &str, verbosity: u8) -> anyhow::Result<()> {
    std::fs::create_dir_all(LOG_DIR).with_context(|| format!("创建日志目录 '{LOG_DIR}' 失败"))?;

    let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix(file_prefix)
        .filename_suffix("log")
        .build(LOG_DIR)
        .context("创建日志文件失败")?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    LOG_GUARD.set(guard).ok();

    let (console_level, file_level) = levels(verbosity);

    let console_layer = fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .event_format(LineFormatter::CONSOLE)
        .with_filter(EnvFilter::new(console_level.as_str()));

    let file_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(file_level.as_str()));
    let file_layer = fmt::Layer::default()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(LineFormatter::FILE)
        .with_filter(file_filter);

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("安装日志订阅器失败")?;
    Ok(())
}

/// 单行日志格式: `[月-日 时:分:秒.毫秒] 级别 [target] > 消息`
struct LineFormatter {
    /// 级别着色
    color: bool,
    /// 输出 target (模块路径)
    target: bool,
}

impl LineFormatter {
    const CONSOLE: Self = Self {
        color: true,
        target: false,
    };
    const FILE: Self = Self {
        color: false,
        target: true,
    };
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[31m",
        Level::WARN => "\x1b[33m",
        Level::INFO => "\x1b[32m",
        _ => "\x1b[34m",
    }
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level = *meta.level();
        write!(writer, "[{}] ", Local::now().format("%m-%d %H:%M:%S%.3f"))?;
        if self.color {
            write!(writer, "{}{:5}\x1b[0m", level_color(level), level)?;
        } else {
            write!(writer, "{:5}", level)?;
        }
        if self.target {
            write!(writer, " {}", meta.target())?;
        }
        write!(writer, " > ")?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_详细级别映射() {
        assert_eq!(levels(0), (Level::INFO, Level::INFO));
        assert_eq!(levels(1), (Level::DEBUG, Level::DEBUG));
        assert_eq!(levels(2), (Level::DEBUG, Level::TRACE));
        assert_eq!(levels(9), (Level::DEBUG, Level::TRACE));
    }

    #[test]
    fn test_级别颜色() {
        assert_eq!(level_color(Level::ERROR), "\x1b[31m");
        assert_eq!(level_color(Level::TRACE), level_color(Level::DEBUG));
    }
}
