//! # summary 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/summary.rs`

use super::CounterArgs;

use clap::Args;

/// summary 子命令参数
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub counter: CounterArgs,
}
