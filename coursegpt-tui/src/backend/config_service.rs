//! 配置服务
//!
//! 配置文件为 JSON，默认位于 `<config_dir>/coursegpt/config.json`。
//! 文件不存在时使用默认值；文件损坏则报错，不会被静默覆盖。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use coursegpt_store::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 覆盖 API 地址的环境变量
pub const API_URL_ENV: &str = "COURSEGPT_API_URL";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// API 基地址，例如 `http://localhost:5000/api`
    pub api_base_url: String,
    pub theme: Theme,
    /// 日志级别（flexi_logger 规格字符串）
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            theme: Theme::Dark,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 用环境变量覆盖 API 地址（空值忽略）
    pub fn apply_env(&mut self) {
        self.apply_api_url(std::env::var(API_URL_ENV).ok());
    }

    fn apply_api_url(&mut self, value: Option<String>) {
        if let Some(url) = value.map(|v| v.trim().to_string())
            && !url.is_empty()
        {
            self.api_base_url = url;
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 平台默认位置；找不到配置目录时退回当前目录
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursegpt")
            .join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("no config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))
    }
}
