//! # 操作按钮
//!
//! 行操作（查看/导出/删除）和批量操作（全部导出/归档备份/生成报告）。
//! 目前只作为标签渲染，没有后端可以执行它们。
//!
//! ## 依赖关系
//! - 被 `view/render.rs` 和 `commands/browse.rs` 使用

/// 行操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Export,
    Delete,
}

/// 批量操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    ExportAll,
    Backup,
    Report,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [RowAction::View, RowAction::Export, RowAction::Delete];

    /// 交互命令关键字
    pub fn keyword(self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Export => "export",
            RowAction::Delete => "delete",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.keyword() == word)
    }
}

impl BulkAction {
    pub const ALL: [BulkAction; 3] = [BulkAction::ExportAll, BulkAction::Backup, BulkAction::Report];

    pub fn label(self) -> &'static str {
        match self {
            BulkAction::ExportAll => "Export All Results",
            BulkAction::Backup => "Backup to Archive",
            BulkAction::Report => "Generate Report",
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            BulkAction::ExportAll => "export-all",
            BulkAction::Backup => "backup",
            BulkAction::Report => "report",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.keyword() == word)
    }
}

/// 行操作列文本
pub fn row_actions_label() -> String {
    RowAction::ALL
        .iter()
        .map(|a| a.keyword())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// 操作未接入后端时的提示
pub fn unavailable_notice(action: &str) -> String {
    format!("'{}' is not available: no results backend is connected", action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_round_trip() {
        for a in RowAction::ALL {
            assert_eq!(RowAction::from_keyword(a.keyword()), Some(a));
        }
        for a in BulkAction::ALL {
            assert_eq!(BulkAction::from_keyword(a.keyword()), Some(a));
        }
        assert_eq!(RowAction::from_keyword("edit"), None);
    }

    #[test]
    fn test_row_actions_label() {
        assert_eq!(row_actions_label(), "view · export · delete");
    }
}
