//! # exoresults - 已保存分析结果浏览工具
//!
//! 在终端中搜索、过滤已保存的系外行星分析结果。
//!
//! ## 子命令
//! - `list`    - 按条件渲染一次结果表格
//! - `browse`  - 交互式浏览
//! - `summary` - 汇总计数
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── store/     (只读结果集)
//!   │     ├── view/      (过滤、显示映射、渲染)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出与日志)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod store;
mod utils;
mod view;

use clap::Parser;
use cli::{Cli, ColorMode};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    match cli.color {
        ColorMode::Auto => {}
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
    utils::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli.command, cli.results.as_deref()) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
