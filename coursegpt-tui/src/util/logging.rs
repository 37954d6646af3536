//! 文件日志
//!
//! 终端被界面占用，日志只写文件：
//! `<data_local_dir>/coursegpt/logs/coursegpt_*.log`，按大小轮转。

use std::path::PathBuf;

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const LOG_FILE_BASENAME: &str = "coursegpt";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// 日志设置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// flexi_logger 规格，如 `info` 或 `info,coursegpt_store=debug`
    pub level: String,
    pub directory: PathBuf,
}

impl LogSettings {
    /// 未指定目录时使用平台数据目录
    pub fn new(level: impl Into<String>, directory: Option<PathBuf>) -> Self {
        Self {
            level: level.into(),
            directory: directory.unwrap_or_else(Self::default_dir),
        }
    }

    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("coursegpt")
            .join("logs")
    }
}

/// 启动文件日志。返回的句柄必须存活到进程结束，否则缓冲区不会刷新。
pub fn init_logging(settings: &LogSettings) -> Result<LoggerHandle> {
    std::fs::create_dir_all(&settings.directory)
        .with_context(|| format!("creating log directory {}", settings.directory.display()))?;

    let handle = Logger::try_with_str(&settings.level)
        .with_context(|| format!("invalid log level `{}`", settings.level))?
        .log_to_file(
            FileSpec::default()
                .directory(&settings.directory)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("starting logger")?;

    log::info!(
        "coursegpt {} starting, level={} dir={}",
        env!("CARGO_PKG_VERSION"),
        settings.level,
        settings.directory.display()
    );
    Ok(handle)
}
