//! # list 命令实现
//!
//! 用命令行给出的过滤条件渲染一次完整视图。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `view/render.rs`

use super::counters_for;
use crate::cli::list::ListArgs;
use crate::error::Result;
use crate::store::RecordStore;
use crate::view::render;
use crate::view::FilterState;

/// 执行 list 命令
pub fn execute(args: ListArgs, store: &RecordStore) -> Result<()> {
    let state = FilterState::new(args.search, args.analysis_type, args.status);
    let counters = counters_for(args.counter.counters, store);

    print!("{}", render::render_view(store.records(), &state, &counters));
    Ok(())
}
