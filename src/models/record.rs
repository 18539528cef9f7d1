//! # 分析结果记录数据模型
//!
//! 一条已保存的系外行星分析结果。记录在加载后不可变。
//!
//! 类型、分类、状态三个字段是"类枚举字符串"：已知取值映射到具名变体，
//! 其余文本原样保存在 `Other` 中。文本转换严格区分大小写，
//! `"Atmospheric"` 是已知变体，`"atmospheric"` 则是 `Other`。
//!
//! ## 依赖关系
//! - 被 `store/`、`view/` 和 `commands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────
// 分析类型
// ─────────────────────────────────────────────────────────────

/// 分析类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnalysisType {
    Classification,
    LightCurve,
    SystemStudy,
    Atmospheric,
    Other(String),
}

impl AnalysisType {
    /// 类型选择器提供的选项（顺序即显示顺序）
    pub const OPTIONS: [AnalysisType; 4] = [
        AnalysisType::Classification,
        AnalysisType::LightCurve,
        AnalysisType::SystemStudy,
        AnalysisType::Atmospheric,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AnalysisType::Classification => "Classification",
            AnalysisType::LightCurve => "Light Curve",
            AnalysisType::SystemStudy => "System Study",
            AnalysisType::Atmospheric => "Atmospheric",
            AnalysisType::Other(s) => s,
        }
    }
}

impl From<&str> for AnalysisType {
    fn from(s: &str) -> Self {
        match s {
            "Classification" => AnalysisType::Classification,
            "Light Curve" => AnalysisType::LightCurve,
            "System Study" => AnalysisType::SystemStudy,
            "Atmospheric" => AnalysisType::Atmospheric,
            other => AnalysisType::Other(other.to_string()),
        }
    }
}

impl From<String> for AnalysisType {
    fn from(s: String) -> Self {
        AnalysisType::from(s.as_str())
    }
}

impl From<AnalysisType> for String {
    fn from(t: AnalysisType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────
// 行星分类
// ─────────────────────────────────────────────────────────────

/// 行星分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Classification {
    SuperEarth,
    RockyPlanet,
    SubNeptune,
    HotJupiter,
    Other(String),
}

impl Classification {
    pub fn as_str(&self) -> &str {
        match self {
            Classification::SuperEarth => "Super Earth",
            Classification::RockyPlanet => "Rocky Planet",
            Classification::SubNeptune => "Sub-Neptune",
            Classification::HotJupiter => "Hot Jupiter",
            Classification::Other(s) => s,
        }
    }
}

impl From<&str> for Classification {
    fn from(s: &str) -> Self {
        match s {
            "Super Earth" => Classification::SuperEarth,
            "Rocky Planet" => Classification::RockyPlanet,
            "Sub-Neptune" => Classification::SubNeptune,
            "Hot Jupiter" => Classification::HotJupiter,
            other => Classification::Other(other.to_string()),
        }
    }
}

impl From<String> for Classification {
    fn from(s: String) -> Self {
        Classification::from(s.as_str())
    }
}

impl From<Classification> for String {
    fn from(c: Classification) -> Self {
        c.as_str().to_string()
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────
// 结果状态
// ─────────────────────────────────────────────────────────────

/// 结果状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Confirmed,
    UnderReview,
    Published,
    Other(String),
}

impl Status {
    /// 状态选择器提供的选项
    pub const OPTIONS: [Status; 3] = [Status::Confirmed, Status::UnderReview, Status::Published];

    pub fn as_str(&self) -> &str {
        match self {
            Status::Confirmed => "Confirmed",
            Status::UnderReview => "Under Review",
            Status::Published => "Published",
            Status::Other(s) => s,
        }
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "Confirmed" => Status::Confirmed,
            "Under Review" => Status::UnderReview,
            "Published" => Status::Published,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::from(s.as_str())
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.as_str().to_string()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────
// 结果记录
// ─────────────────────────────────────────────────────────────

/// 已保存的分析结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// 唯一标识 (e.g. "SR-001")
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub analysis_type: AnalysisType,

    /// 日期，保持原始字符串 (YYYY-MM-DD)
    pub date: String,

    pub classification: Classification,

    /// 置信度百分比 (0-100)
    pub confidence: f64,

    /// 宜居性评分 (0.0-1.0)
    pub habitability: f64,

    pub status: Status,
}

impl ResultRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        analysis_type: impl Into<AnalysisType>,
        date: impl Into<String>,
        classification: impl Into<Classification>,
        confidence: f64,
        habitability: f64,
        status: impl Into<Status>,
    ) -> Self {
        ResultRecord {
            id: id.into(),
            name: name.into(),
            analysis_type: analysis_type.into(),
            date: date.into(),
            classification: classification.into(),
            confidence,
            habitability,
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_round_trip_through_text() {
        for t in AnalysisType::OPTIONS {
            assert_eq!(AnalysisType::from(t.as_str()), t);
        }
        for s in Status::OPTIONS {
            assert_eq!(Status::from(s.as_str()), s);
        }
        assert_eq!(Classification::from("Sub-Neptune"), Classification::SubNeptune);
    }

    #[test]
    fn test_conversion_is_case_sensitive() {
        assert_eq!(
            AnalysisType::from("atmospheric"),
            AnalysisType::Other("atmospheric".to_string())
        );
        assert_eq!(Status::from("confirmed"), Status::Other("confirmed".to_string()));
        assert_eq!(
            Classification::from("hot jupiter"),
            Classification::Other("hot jupiter".to_string())
        );
    }

    #[test]
    fn test_other_keeps_original_text() {
        let c = Classification::from("Mini-Neptune");
        assert_eq!(c.to_string(), "Mini-Neptune");
        assert_eq!(Status::from("Archived").as_str(), "Archived");
    }
}
