//! CourseGPT TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! CourseGPT TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()                // 解析命令行
//!     LocalConfigService::load()  // 读取配置：文件 < 环境变量 < 命令行
//!     init_logging()              // 文件日志，句柄必须活到最后
//!     Runtime::new()              // 后台调用所用的 tokio 运行时
//!     init_terminal()             // 初始化终端
//!     enter_page()                // 进入起始页面，排队首次拉取
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use backend::{AppConfig, Backend, ConfigService, CoreService, LocalConfigService};
use model::{App, Page};
use util::{LogSettings, init_logging, init_terminal, restore_terminal};

/// Terminal client for CourseGPT lessons and modules
#[derive(Parser, Debug)]
#[command(name = "coursegpt", version, about)]
struct Cli {
    /// API base URL, e.g. http://localhost:5000/api (overrides config and COURSEGPT_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Page to open on start: /, /lessons, /modules or /about
    #[arg(long, default_value = "/")]
    page: String,

    /// Log level spec, e.g. info or info,coursegpt_store=debug
    #[arg(long, env = "COURSEGPT_LOG")]
    log_level: Option<String>,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Path to the JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

/// 读取配置文件；首次运行时写出默认配置
fn load_config(service: &LocalConfigService) -> Result<AppConfig> {
    let config = service.load()?;
    if !service.path().exists()
        && let Err(e) = service.save(&config)
    {
        // 此时日志尚未启动，写不出默认配置不影响运行
        eprintln!("coursegpt: could not write default config: {e:#}");
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 配置：文件 < 环境变量 < 命令行
    let config_service = cli
        .config
        .clone()
        .map_or_else(LocalConfigService::default, LocalConfigService::new);
    let mut config = load_config(&config_service)?;
    config.apply_env();
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // 2. 日志
    let _logger = init_logging(&LogSettings::new(&config.log_level, cli.log_dir))?;
    log::info!(
        "config from {}, api at {}",
        config_service.path().display(),
        config.api_base_url
    );
    view::theme::set_theme(config.theme);

    // 3. 后台运行时
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let core = CoreService::new(&config.api_base_url);
    let (backend, events) = Backend::new(core, runtime.handle().clone());

    // 4. 初始化终端，进入起始页面
    let mut terminal = init_terminal()?;
    let mut app = App::new(config.api_base_url);
    update::enter_page(&mut app, Page::from_path(&cli.page));

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &backend, events);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;
    if let Err(e) = &result {
        log::error!("exiting with error: {e:#}");
    }
    result
}
