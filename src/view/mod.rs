//! # 结果视图模块
//!
//! 已保存分析结果的可搜索、可过滤表格视图。
//!
//! ## 组成
//! - `filter`: 过滤谓词与过滤状态
//! - `display`: 分类/状态/宜居性的显示映射
//! - `summary`: 汇总计数
//! - `actions`: 行操作与批量操作标签
//! - `render`: 组合以上部分生成终端输出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`

pub mod actions;
pub mod display;
pub mod filter;
pub mod render;
pub mod summary;

pub use filter::{FilterState, Selector};
pub use summary::SummaryCounters;
