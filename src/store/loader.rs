//! # 结果文件加载
//!
//! 从 CSV 文件读取结果记录（只读，启动时读取一次）。
//!
//! ## 文件格式
//! 表头: `id,name,type,date,classification,confidence,habitability,status`
//!
//! ## 校验
//! - id 与 name 不能为空
//! - confidence 在 0-100 之间
//! - habitability 在 0-1 之间
//! - id 唯一
//!
//! ## 依赖关系
//! - 被 `store/mod.rs` 调用
//! - 使用 `csv` 库解析

use crate::error::{ExoError, Result};
use crate::models::ResultRecord;

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 从文件加载结果记录
pub fn load_csv(path: &Path) -> Result<Vec<ResultRecord>> {
    if !path.exists() {
        return Err(ExoError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| ExoError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_csv(file)
}

/// 从任意读取器解析结果记录
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<ResultRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record: ResultRecord = row.deserialize(Some(&headers))?;

        validate(&record, line)?;

        if !seen.insert(record.id.clone()) {
            return Err(ExoError::DuplicateId {
                line,
                id: record.id,
            });
        }
        records.push(record);
    }

    Ok(records)
}

fn validate(record: &ResultRecord, line: u64) -> Result<()> {
    let invalid = |reason: String| ExoError::InvalidRecord { line, reason };

    if record.id.is_empty() {
        return Err(invalid("empty id".to_string()));
    }
    if record.name.is_empty() {
        return Err(invalid(format!("empty name for '{}'", record.id)));
    }
    if !(0.0..=100.0).contains(&record.confidence) {
        return Err(invalid(format!(
            "confidence {} is outside 0-100",
            record.confidence
        )));
    }
    if !(0.0..=1.0).contains(&record.habitability) {
        return Err(invalid(format!(
            "habitability {} is outside 0-1",
            record.habitability
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisType, Classification, Status};
    use std::io::Write;

    const HEADER: &str = "id,name,type,date,classification,confidence,habitability,status\n";

    #[test]
    fn test_parse_csv_basic() {
        let content = format!(
            "{}{}{}",
            HEADER,
            "SR-101, LHS 1140b Survey ,System Study,2024-01-02,Super Earth,81.5,0.66,Confirmed\n",
            "SR-102,HD 189733b Spectra,Atmospheric,2024-01-03,Gas Giant,97.0,0.0,Archived\n",
        );
        let records = parse_csv(content.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "LHS 1140b Survey");
        assert_eq!(records[0].analysis_type, AnalysisType::SystemStudy);
        assert_eq!(records[1].classification, Classification::Other("Gas Giant".to_string()));
        assert_eq!(records[1].status, Status::Other("Archived".to_string()));
    }

    #[test]
    fn test_parse_csv_rejects_out_of_range_scores() {
        let content = format!(
            "{}SR-1,Bad,Classification,2024-01-01,Super Earth,101.0,0.5,Confirmed\n",
            HEADER
        );
        match parse_csv(content.as_bytes()) {
            Err(ExoError::InvalidRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("confidence"));
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }

        let content = format!(
            "{}SR-1,Bad,Classification,2024-01-01,Super Earth,50.0,1.5,Confirmed\n",
            HEADER
        );
        assert!(matches!(
            parse_csv(content.as_bytes()),
            Err(ExoError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_parse_csv_rejects_duplicate_ids() {
        let content = format!(
            "{}{}{}",
            HEADER,
            "SR-1,A,Classification,2024-01-01,Super Earth,50.0,0.5,Confirmed\n",
            "SR-1,B,Classification,2024-01-01,Super Earth,50.0,0.5,Confirmed\n",
        );
        match parse_csv(content.as_bytes()) {
            Err(ExoError::DuplicateId { line, id }) => {
                assert_eq!(id, "SR-1");
                assert_eq!(line, 3);
            }
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_non_numeric_score() {
        let content = format!(
            "{}SR-1,A,Classification,2024-01-01,Super Earth,high,0.5,Confirmed\n",
            HEADER
        );
        assert!(matches!(
            parse_csv(content.as_bytes()),
            Err(ExoError::CsvError(_))
        ));
    }

    #[test]
    fn test_load_csv_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}SR-7,GJ 1214b,Light Curve,2024-02-01,Sub-Neptune,88.8,0.2,Under Review\n",
            HEADER
        )
        .unwrap();

        let records = load_csv(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, Status::UnderReview);
    }

    #[test]
    fn test_load_csv_missing_file() {
        let result = load_csv(Path::new("/nonexistent/results.csv"));
        assert!(matches!(result, Err(ExoError::FileNotFound { .. })));
    }
}
