//! # 美化输出工具
//!
//! 提供统一的终端输出样式。`*_line` 函数只生成文本，
//! 交互界面把它们写入自己的输出流；`print_*` 直接打印。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `view/render.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

const RULE_WIDTH: usize = 72;

pub fn info_line(msg: &str) -> String {
    format!("{} {}", "[*]".blue().bold(), msg)
}

pub fn warning_line(msg: &str) -> String {
    format!("{} {}", "[WARN]".yellow().bold(), msg)
}

pub fn error_line(msg: &str) -> String {
    format!("{} {}", "[ERR]".red().bold(), msg)
}

/// 标题栏文本
pub fn header_block(title: &str) -> String {
    let line = "─".repeat(RULE_WIDTH);
    format!("\n{}\n  {}\n{}\n", line.dimmed(), title.bold(), line.dimmed())
}

/// 分隔线文本
pub fn separator() -> String {
    "─".repeat(RULE_WIDTH).dimmed().to_string()
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{}", error_line(msg));
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{}", warning_line(msg));
}

/// 打印标题栏
pub fn print_header(title: &str) {
    println!("{}", header_block(title));
}
