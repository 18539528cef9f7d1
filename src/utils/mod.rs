//! # 工具函数模块
//!
//! 提供美化输出、日志初始化等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`、`view/` 和 `main.rs` 使用
//! - 子模块: output, logging

pub mod logging;
pub mod output;
