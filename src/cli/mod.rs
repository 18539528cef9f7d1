//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `list`: 按条件渲染一次结果表格
//! - `browse`: 交互式浏览，每行输入更新过滤状态并重新渲染
//! - `summary`: 只显示汇总计数
//!
//! ## 全局参数
//! - `--results <FILE>` / `EXORESULTS_FILE`: 只读结果文件（CSV）
//! - `--color`: 颜色输出控制
//! - `-v, --verbose`: 输出调试日志
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: list, browse, summary

pub mod browse;
pub mod list;
pub mod summary;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// exoresults - 已保存的系外行星分析结果浏览工具
#[derive(Parser)]
#[command(name = "exoresults")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Browse, search and filter saved exoplanet analysis results",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Read results from a CSV file instead of the built-in set
    #[arg(long, global = true, env = "EXORESULTS_FILE")]
    pub results: Option<PathBuf>,

    /// When to use colored output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Render the filtered results table once
    List(list::ListArgs),

    /// Interactive view: each input line updates the filters and re-renders
    Browse(browse::BrowseArgs),

    /// Print only the summary counters
    Summary(summary::SummaryArgs),
}

/// 颜色输出控制
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Detect from the terminal and NO_COLOR / CLICOLOR
    #[default]
    Auto,
    /// Always emit colors
    Always,
    /// Never emit colors
    Never,
}

/// 汇总计数来源
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum CounterMode {
    /// Count the loaded results by status
    #[default]
    Derived,
    /// Show the fixed legacy counters (24 / 18 / 4 / 7)
    Static,
}

impl std::fmt::Display for CounterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterMode::Derived => write!(f, "derived"),
            CounterMode::Static => write!(f, "static"),
        }
    }
}

/// 各子命令共享的计数参数
#[derive(Args, Debug)]
pub struct CounterArgs {
    /// Where the summary counters come from
    #[arg(long, value_enum, env = "EXORESULTS_COUNTERS", default_value_t = CounterMode::Derived)]
    pub counters: CounterMode,
}
