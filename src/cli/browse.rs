//! # browse 子命令 CLI 定义
//!
//! 交互式浏览。初始过滤条件可以通过参数给出，之后由输入更新。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/browse.rs`

use super::CounterArgs;
use crate::models::{AnalysisType, Status};
use crate::view::filter::{parse_status_selector, parse_type_selector};
use crate::view::Selector;

use clap::Args;

/// browse 子命令参数
#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Initial search text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Initial analysis type filter
    #[arg(
        short = 't',
        long = "type",
        value_parser = parse_type_selector,
        default_value = "all"
    )]
    pub analysis_type: Selector<AnalysisType>,

    /// Initial status filter
    #[arg(long, value_parser = parse_status_selector, default_value = "all")]
    pub status: Selector<Status>,

    /// Do not clear the screen between renders
    #[arg(long, default_value_t = false)]
    pub no_clear: bool,

    #[command(flatten)]
    pub counter: CounterArgs,
}
