//! # 显示映射
//!
//! 把记录的类别字段映射为显示标记。所有映射都是全函数，
//! 未识别的取值落入默认样式，不会失败。
//!
//! 标记只描述"是什么颜色"，真正的着色在 `view/render.rs` 中完成。
//!
//! ## 依赖关系
//! - 被 `view/render.rs` 使用
//! - 使用 `colored` 把标记转换为终端样式

use crate::models::{Classification, Status};

use colored::{ColoredString, Colorize};

/// 高宜居性下限（含）
pub const HABITABILITY_HIGH: f64 = 0.7;
/// 中宜居性下限（含）
pub const HABITABILITY_MEDIUM: f64 = 0.4;

/// 分类徽章颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Green,
    Orange,
    Blue,
    Red,
    Gray,
}

/// 状态徽章样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    SolidGreen,
    Secondary,
    SolidBlue,
    Outline,
}

/// 宜居性分档
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitabilityBand {
    High,
    Medium,
    Low,
}

/// 分类 -> 徽章颜色
pub fn classification_color(classification: &Classification) -> ColorToken {
    match classification {
        Classification::SuperEarth => ColorToken::Green,
        Classification::RockyPlanet => ColorToken::Orange,
        Classification::SubNeptune => ColorToken::Blue,
        Classification::HotJupiter => ColorToken::Red,
        Classification::Other(_) => ColorToken::Gray,
    }
}

/// 状态 -> 徽章样式
pub fn status_badge(status: &Status) -> StatusBadge {
    match status {
        Status::Confirmed => StatusBadge::SolidGreen,
        Status::UnderReview => StatusBadge::Secondary,
        Status::Published => StatusBadge::SolidBlue,
        Status::Other(_) => StatusBadge::Outline,
    }
}

/// 宜居性评分 -> 分档（各档下限均包含）
pub fn habitability_band(score: f64) -> HabitabilityBand {
    if score >= HABITABILITY_HIGH {
        HabitabilityBand::High
    } else if score >= HABITABILITY_MEDIUM {
        HabitabilityBand::Medium
    } else {
        HabitabilityBand::Low
    }
}

// ─────────────────────────────────────────────────────────────
// 着色
// ─────────────────────────────────────────────────────────────

impl ColorToken {
    /// 白字彩底徽章
    pub fn paint(self, text: &str) -> ColoredString {
        let badge = format!(" {} ", text).white().bold();
        match self {
            ColorToken::Green => badge.on_green(),
            ColorToken::Orange => badge.on_truecolor(234, 88, 12),
            ColorToken::Blue => badge.on_blue(),
            ColorToken::Red => badge.on_red(),
            ColorToken::Gray => badge.on_truecolor(75, 85, 99),
        }
    }
}

impl StatusBadge {
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            StatusBadge::SolidGreen => format!(" {} ", text).white().bold().on_green(),
            StatusBadge::Secondary => format!(" {} ", text).black().on_bright_white(),
            StatusBadge::SolidBlue => format!(" {} ", text).white().bold().on_blue(),
            StatusBadge::Outline => format!("[{}]", text).normal(),
        }
    }
}

impl HabitabilityBand {
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            HabitabilityBand::High => text.bright_green(),
            HabitabilityBand::Medium => text.bright_yellow(),
            HabitabilityBand::Low => text.bright_red(),
        }
    }
}
