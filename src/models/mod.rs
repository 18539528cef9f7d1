//! # 数据模型模块
//!
//! 定义分析结果记录及其类枚举字段。
//!
//! ## 依赖关系
//! - 被 `store/`、`view/` 和 `commands/` 使用
//! - 子模块: record

pub mod record;

pub use record::{AnalysisType, Classification, ResultRecord, Status};
