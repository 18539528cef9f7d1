//! # list 子命令 CLI 定义
//!
//! 按搜索词、类型、状态过滤并渲染一次结果表格。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use super::CounterArgs;
use crate::models::{AnalysisType, Status};
use crate::view::filter::{parse_status_selector, parse_type_selector};
use crate::view::Selector;

use clap::Args;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive text matched against name or classification
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Analysis type: all, "Classification", "Light Curve", "System Study", "Atmospheric"
    #[arg(
        short = 't',
        long = "type",
        value_parser = parse_type_selector,
        default_value = "all"
    )]
    pub analysis_type: Selector<AnalysisType>,

    /// Status: all, "Confirmed", "Under Review", "Published"
    #[arg(long, value_parser = parse_status_selector, default_value = "all")]
    pub status: Selector<Status>,

    #[command(flatten)]
    pub counter: CounterArgs,
}
