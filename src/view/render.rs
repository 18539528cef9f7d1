//! # 视图组合
//!
//! 结果集 -> 过滤谓词 -> 过滤后序列 -> 显示映射 -> 表格行。
//!
//! ## 渲染内容
//! - 标题栏和结果数徽章（等于过滤后序列长度）
//! - 当前过滤条件
//! - 结果表格（无结果时显示提示行）
//! - 四个汇总计数卡片
//! - 批量操作标签
//!
//! 每次渲染都从头计算，不缓存任何中间结果。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `view/filter.rs`, `view/display.rs`, `view/summary.rs`, `view/actions.rs`
//! - 使用 `tabled` 绘制表格

use crate::models::ResultRecord;
use crate::utils::output;
use crate::view::actions::{self, BulkAction};
use crate::view::display::{classification_color, habitability_band, status_badge};
use crate::view::filter::{self, FilterState};
use crate::view::summary::SummaryCounters;

use colored::Colorize;
use std::fmt::Write;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

const TITLE: &str = "Saved Analysis Results";
const DESCRIPTION: &str = "Access and manage your saved exoplanet analysis results, \
                           classifications, and research findings.";

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
pub struct ResultRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub analysis_type: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Classification")]
    pub classification: String,
    #[tabled(rename = "Confidence")]
    pub confidence: String,
    #[tabled(rename = "Habitability")]
    pub habitability: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Actions")]
    pub actions: String,
}

impl ResultRow {
    pub fn from_record(record: &ResultRecord) -> Self {
        let classification = record.classification.as_str();
        let status = record.status.as_str();
        let habitability = record.habitability.to_string();

        ResultRow {
            id: record.id.dimmed().to_string(),
            name: record.name.bold().to_string(),
            analysis_type: record.analysis_type.to_string(),
            date: record.date.clone(),
            classification: classification_color(&record.classification)
                .paint(classification)
                .to_string(),
            confidence: format!("{}%", record.confidence),
            habitability: habitability_band(record.habitability)
                .paint(&habitability)
                .to_string(),
            status: status_badge(&record.status).paint(status).to_string(),
            actions: actions::row_actions_label().dimmed().to_string(),
        }
    }
}

/// 结果数徽章
pub fn count_badge(count: usize) -> String {
    format!("{} results", count)
}

/// 当前过滤条件
pub fn filters_line(state: &FilterState) -> String {
    let search = if state.search.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        format!("\"{}\"", state.search).cyan().to_string()
    };
    let line = format!(
        "{} {}   {} {}   {} {}",
        "Search:".dimmed(),
        search,
        "Type:".dimmed(),
        state.analysis_type.to_string().cyan(),
        "Status:".dimmed(),
        state.status.to_string().cyan()
    );
    if state.is_pass_through() {
        format!("{}   {}", line, "(showing all)".dimmed())
    } else {
        line
    }
}

/// 结果表格；无结果时返回提示行
pub fn results_table(filtered: &[&ResultRecord]) -> String {
    if filtered.is_empty() {
        return output::warning_line("No results match the current filters.");
    }

    let rows: Vec<ResultRow> = filtered.iter().map(|r| ResultRow::from_record(r)).collect();
    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}

/// 汇总计数卡片
pub fn counter_tiles(counters: &SummaryCounters) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        counters.total.to_string().blue().bold().to_string(),
        counters.confirmed.to_string().green().bold().to_string(),
        counters.under_review.to_string().yellow().bold().to_string(),
        counters.published.to_string().purple().bold().to_string(),
    ]);
    builder.push_record([
        "Total Results".dimmed().to_string(),
        "Confirmed".dimmed().to_string(),
        "Under Review".dimmed().to_string(),
        "Published".dimmed().to_string(),
    ]);

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// 批量操作标签
pub fn bulk_actions_line() -> String {
    BulkAction::ALL
        .iter()
        .map(|a| format!("[ {} ]", a.label()))
        .collect::<Vec<_>>()
        .join("  ")
        .dimmed()
        .to_string()
}

/// 渲染完整视图
pub fn render_view(
    records: &[ResultRecord],
    state: &FilterState,
    counters: &SummaryCounters,
) -> String {
    let filtered = filter::apply(records, state);
    let mut out = String::new();

    let title = format!(
        "{}  {}",
        TITLE,
        format!(" {} ", count_badge(filtered.len())).black().on_white()
    );
    // String 的 fmt::Write 不会失败
    let _ = writeln!(out, "{}", output::header_block(&title));
    let _ = writeln!(out, "{}\n", DESCRIPTION.dimmed());
    let _ = writeln!(out, "{}", filters_line(state));
    let _ = writeln!(out, "{}", output::separator());
    let _ = writeln!(out, "{}\n", results_table(&filtered));
    let _ = writeln!(out, "{}\n", counter_tiles(counters));
    let _ = writeln!(out, "{}", bulk_actions_line());

    out
}
