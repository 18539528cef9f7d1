//! # summary 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/summary.rs` 定义的参数
//! - 使用 `view/render.rs` 的计数卡片

use super::counters_for;
use crate::cli::summary::SummaryArgs;
use crate::error::Result;
use crate::store::RecordStore;
use crate::utils::output;
use crate::view::render;

/// 执行 summary 命令
pub fn execute(args: SummaryArgs, store: &RecordStore) -> Result<()> {
    output::print_header(&format!(
        "Saved Results Summary ({} counters)",
        args.counter.counters
    ));

    let counters = counters_for(args.counter.counters, store);
    println!("{}", render::counter_tiles(&counters));
    Ok(())
}
