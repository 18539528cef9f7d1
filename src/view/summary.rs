//! # 汇总计数
//!
//! 四个计数卡片：总数、已确认、审核中、已发表。
//!
//! 默认从完整（未过滤）结果集按状态统计；`static` 模式保留旧版界面
//! 中写死的 24/18/4/7，这组数字与结果集并不一致。
//!
//! ## 依赖关系
//! - 被 `view/render.rs` 和 `commands/` 使用

use crate::models::{ResultRecord, Status};

/// 汇总计数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounters {
    pub total: usize,
    pub confirmed: usize,
    pub under_review: usize,
    pub published: usize,
}

impl SummaryCounters {
    /// 旧版界面的固定计数
    pub const LEGACY: SummaryCounters = SummaryCounters {
        total: 24,
        confirmed: 18,
        under_review: 4,
        published: 7,
    };

    /// 从结果集统计（与过滤状态无关）
    pub fn derive(records: &[ResultRecord]) -> Self {
        let count = |status: Status| records.iter().filter(|r| r.status == status).count();
        SummaryCounters {
            total: records.len(),
            confirmed: count(Status::Confirmed),
            under_review: count(Status::UnderReview),
            published: count(Status::Published),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::builtin;

    #[test]
    fn test_derive_from_builtin() {
        let counters = SummaryCounters::derive(&builtin::records());
        assert_eq!(
            counters,
            SummaryCounters {
                total: 6,
                confirmed: 3,
                under_review: 1,
                published: 2,
            }
        );
    }

    #[test]
    fn test_derive_ignores_unknown_status_except_total() {
        let records = vec![ResultRecord::new(
            "X-1",
            "Archived Run",
            "Classification",
            "2024-01-01",
            "Super Earth",
            10.0,
            0.1,
            "Archived",
        )];
        let counters = SummaryCounters::derive(&records);
        assert_eq!(counters.total, 1);
        assert_eq!(counters.confirmed + counters.under_review + counters.published, 0);
    }

    #[test]
    fn test_derive_empty() {
        let counters = SummaryCounters::derive(&[]);
        assert_eq!(counters.total, 0);
    }
}
