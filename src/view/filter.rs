//! # 过滤谓词
//!
//! 三个独立条件以逻辑与组合：
//! - 搜索文本为空，或记录名称/分类包含搜索文本（不区分大小写）
//! - 类型选择器为 `all`，或与记录类型完全相等
//! - 状态选择器为 `all`，或与记录状态完全相等
//!
//! 过滤保持原始顺序，不重新排序。
//!
//! ## 依赖关系
//! - 被 `view/render.rs` 和 `commands/` 使用
//! - 使用 `models/record.rs`

use crate::error::{ExoError, Result};
use crate::models::{AnalysisType, ResultRecord, Status};

use tracing::debug;

/// 选择器哨兵值，表示不按该条件过滤
pub const ALL: &str = "all";

// ─────────────────────────────────────────────────────────────
// 选择器
// ─────────────────────────────────────────────────────────────

/// 可出现在选择器中的取值
pub trait SelectorOption: Clone + PartialEq + Sized {
    /// 选择器名称，用于错误信息
    const KIND: &'static str;

    fn options() -> Vec<Self>;

    fn label(&self) -> &str;
}

impl SelectorOption for AnalysisType {
    const KIND: &'static str = "type";

    fn options() -> Vec<Self> {
        AnalysisType::OPTIONS.to_vec()
    }

    fn label(&self) -> &str {
        self.as_str()
    }
}

impl SelectorOption for Status {
    const KIND: &'static str = "status";

    fn options() -> Vec<Self> {
        Status::OPTIONS.to_vec()
    }

    fn label(&self) -> &str {
        self.as_str()
    }
}

/// 类别选择器
#[derive(Debug, Clone, PartialEq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: SelectorOption> Selector<T> {
    /// 解析选择器输入
    ///
    /// 接受 `all`、选项原文（如 `Light Curve`），或其短横线别名
    /// （如 `light-curve`，不区分大小写）。其他输入报错。
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input == ALL {
            return Ok(Selector::All);
        }

        let options = T::options();
        if let Some(opt) = options.iter().find(|o| o.label() == input) {
            return Ok(Selector::Only(opt.clone()));
        }
        if let Some(opt) = options
            .iter()
            .find(|o| kebab_alias(o.label()) == input.to_lowercase())
        {
            return Ok(Selector::Only(opt.clone()));
        }

        let mut names = vec![ALL.to_string()];
        names.extend(options.iter().map(|o| format!("\"{}\"", o.label())));
        Err(ExoError::InvalidSelector {
            kind: T::KIND.to_string(),
            value: input.to_string(),
            options: names.join(", "),
        })
    }

    /// 判断取值是否通过该选择器（完全相等）
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(v) => v == value,
        }
    }
}

impl<T: SelectorOption> std::fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::All => f.write_str(ALL),
            Selector::Only(v) => f.write_str(v.label()),
        }
    }
}

/// clap `value_parser` 用的类型选择器解析
pub fn parse_type_selector(input: &str) -> std::result::Result<Selector<AnalysisType>, String> {
    Selector::parse(input).map_err(|e| e.to_string())
}

/// clap `value_parser` 用的状态选择器解析
pub fn parse_status_selector(input: &str) -> std::result::Result<Selector<Status>, String> {
    Selector::parse(input).map_err(|e| e.to_string())
}

fn kebab_alias(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

// ─────────────────────────────────────────────────────────────
// 过滤状态
// ─────────────────────────────────────────────────────────────

/// 过滤状态
///
/// 不可变值：每次输入产生一个新状态替换旧状态。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub search: String,
    pub analysis_type: Selector<AnalysisType>,
    pub status: Selector<Status>,
}

impl FilterState {
    pub fn new(
        search: impl Into<String>,
        analysis_type: Selector<AnalysisType>,
        status: Selector<Status>,
    ) -> Self {
        FilterState {
            search: search.into(),
            analysis_type,
            status,
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        FilterState {
            search: search.into(),
            ..self
        }
    }

    pub fn with_type(self, analysis_type: Selector<AnalysisType>) -> Self {
        FilterState {
            analysis_type,
            ..self
        }
    }

    pub fn with_status(self, status: Selector<Status>) -> Self {
        FilterState { status, ..self }
    }

    /// 所有条件均为通配
    pub fn is_pass_through(&self) -> bool {
        self.search.is_empty() && self.analysis_type == Selector::All && self.status == Selector::All
    }
}

// ─────────────────────────────────────────────────────────────
// 谓词
// ─────────────────────────────────────────────────────────────

/// 判断记录是否满足过滤状态
pub fn matches(record: &ResultRecord, state: &FilterState) -> bool {
    let matches_search = state.search.is_empty() || {
        let needle = state.search.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record
                .classification
                .as_str()
                .to_lowercase()
                .contains(&needle)
    };
    let matches_type = state.analysis_type.admits(&record.analysis_type);
    let matches_status = state.status.admits(&record.status);

    matches_search && matches_type && matches_status
}

/// 对整个结果集应用过滤（保持顺序）
pub fn apply<'a>(records: &'a [ResultRecord], state: &FilterState) -> Vec<&'a ResultRecord> {
    let filtered: Vec<&ResultRecord> = records.iter().filter(|r| matches(r, state)).collect();
    debug!(
        search = %state.search,
        analysis_type = %state.analysis_type,
        status = %state.status,
        matched = filtered.len(),
        total = records.len(),
        "filter applied"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::builtin;

    fn names(records: &[&ResultRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_pass_through_keeps_everything_in_order() {
        let records = builtin::records();
        let state = FilterState::default();
        assert!(state.is_pass_through());

        let filtered = apply(&records, &state);
        let expected: Vec<&ResultRecord> = records.iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = builtin::records();
        for term in ["kepler", "KEPLER", "e", "neptune", "b S", "zzz"] {
            let state = FilterState::default().with_search(term);
            let filtered = apply(&records, &state);
            let needle = term.to_lowercase();
            for r in &records {
                let expected = r.name.to_lowercase().contains(&needle)
                    || r.classification.as_str().to_lowercase().contains(&needle);
                assert_eq!(filtered.contains(&r), expected, "term={} id={}", term, r.id);
            }
        }
    }

    #[test]
    fn test_type_filter_is_exact() {
        let mut records = builtin::records();
        records.push(ResultRecord::new(
            "SR-900",
            "Lowercase Type",
            "atmospheric",
            "2024-01-01",
            "Hot Jupiter",
            50.0,
            0.1,
            "Confirmed",
        ));

        let state = FilterState::default().with_type(Selector::Only(AnalysisType::Atmospheric));
        let filtered = apply(&records, &state);
        assert_eq!(names(&filtered), vec!["WASP-121b Study"]);

        for r in &records {
            assert_eq!(
                filtered.contains(&r),
                r.analysis_type == AnalysisType::Atmospheric
            );
        }
    }

    #[test]
    fn test_search_kepler() {
        let records = builtin::records();
        let state = FilterState::default().with_search("kepler");
        assert_eq!(names(&apply(&records, &state)), vec!["Kepler-442b Analysis"]);
    }

    #[test]
    fn test_status_published() {
        let records = builtin::records();
        let state = FilterState::default().with_status(Selector::Only(Status::Published));
        assert_eq!(
            names(&apply(&records, &state)),
            vec!["TRAPPIST-1e Analysis", "WASP-121b Study"]
        );
    }

    #[test]
    fn test_search_rocky_and_confirmed() {
        let records = builtin::records();
        let state = FilterState::new("rocky", Selector::All, Selector::Only(Status::Confirmed));
        assert_eq!(
            names(&apply(&records, &state)),
            vec!["TOI-715b Detection", "Proxima Centauri b"]
        );
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::<AnalysisType>::parse("all").unwrap(), Selector::All);
        assert_eq!(
            Selector::<AnalysisType>::parse("Light Curve").unwrap(),
            Selector::Only(AnalysisType::LightCurve)
        );
        assert_eq!(
            Selector::<AnalysisType>::parse("system-study").unwrap(),
            Selector::Only(AnalysisType::SystemStudy)
        );
        assert_eq!(
            Selector::<Status>::parse("Under-Review").unwrap(),
            Selector::Only(Status::UnderReview)
        );
    }

    #[test]
    fn test_selector_parse_rejects_unknown() {
        match Selector::<Status>::parse("Archived") {
            Err(ExoError::InvalidSelector { kind, options, .. }) => {
                assert_eq!(kind, "status");
                assert!(options.contains("\"Under Review\""));
            }
            other => panic!("expected InvalidSelector, got {:?}", other),
        }
        assert!(parse_type_selector("spectra").is_err());
    }

    #[test]
    fn test_state_updates_replace_single_field() {
        let state = FilterState::default()
            .with_search("b")
            .with_status(Selector::Only(Status::Confirmed));
        let next = state.clone().with_search("");

        assert_eq!(next.status, Selector::Only(Status::Confirmed));
        assert_eq!(next.search, "");
        assert_eq!(state.search, "b");
    }
}
