//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `store/`, `view/`, `utils/`
//! - 子模块: list, browse, summary

pub mod browse;
pub mod list;
pub mod summary;

use crate::cli::{Commands, CounterMode};
use crate::error::Result;
use crate::store::RecordStore;
use crate::utils::output;
use crate::view::SummaryCounters;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands, results: Option<&Path>) -> Result<()> {
    let store = RecordStore::open(results)?;
    if store.is_empty() {
        output::print_warning("The results source contains no records.");
    }

    match cmd {
        Commands::List(args) => list::execute(args, &store),
        Commands::Browse(args) => browse::execute(args, &store),
        Commands::Summary(args) => summary::execute(args, &store),
    }
}

/// 按模式选择汇总计数
pub fn counters_for(mode: CounterMode, store: &RecordStore) -> SummaryCounters {
    match mode {
        CounterMode::Derived => SummaryCounters::derive(store.records()),
        CounterMode::Static => SummaryCounters::LEGACY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_for_mode() {
        let store = RecordStore::builtin();
        assert_eq!(counters_for(CounterMode::Static, &store), SummaryCounters::LEGACY);
        assert_eq!(counters_for(CounterMode::Derived, &store).total, 6);
    }
}
