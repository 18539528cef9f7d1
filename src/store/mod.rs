//! # 结果集模块
//!
//! 固定、有序、只读的结果记录序列。在启动时确定，之后不再修改。
//!
//! ## 数据来源
//! - 默认: 内置示例结果集
//! - `--results <FILE>` / `EXORESULTS_FILE`: 只读 CSV 文件
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: builtin, loader

pub mod builtin;
pub mod loader;

use crate::error::Result;
use crate::models::ResultRecord;

use std::path::Path;
use tracing::info;

/// 只读结果集
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<ResultRecord>,
}

impl RecordStore {
    /// 内置结果集
    pub fn builtin() -> Self {
        RecordStore {
            records: builtin::records(),
        }
    }

    /// 从 CSV 文件加载
    pub fn from_csv(path: &Path) -> Result<Self> {
        let records = loader::load_csv(path)?;
        info!(path = %path.display(), count = records.len(), "loaded results file");
        Ok(RecordStore { records })
    }

    /// 按配置打开结果集：有文件则读取文件，否则使用内置结果集
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_csv(p),
            None => {
                let store = Self::builtin();
                info!(count = store.len(), "using built-in results");
                Ok(store)
            }
        }
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 按 id 查找记录
    pub fn get(&self, id: &str) -> Option<&ResultRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_order() {
        let store = RecordStore::builtin();
        let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["SR-001", "SR-002", "SR-003", "SR-004", "SR-005", "SR-006"]
        );
    }

    #[test]
    fn test_open_without_path_uses_builtin() {
        let store = RecordStore::open(None).unwrap();
        assert_eq!(store.len(), 6);
        assert_eq!(store.get("SR-004").unwrap().name, "TRAPPIST-1e Analysis");
        assert!(store.get("SR-999").is_none());
    }
}
