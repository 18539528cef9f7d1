//! # 内置结果集
//!
//! 未指定结果文件时使用的六条示例记录，顺序即显示顺序。

use crate::models::ResultRecord;

/// 构建内置结果集
pub fn records() -> Vec<ResultRecord> {
    vec![
        ResultRecord::new(
            "SR-001",
            "Kepler-442b Analysis",
            "Classification",
            "2023-10-15",
            "Super Earth",
            87.3,
            0.72,
            "Confirmed",
        ),
        ResultRecord::new(
            "SR-002",
            "K2-18b Transit Study",
            "Light Curve",
            "2023-10-14",
            "Sub-Neptune",
            92.1,
            0.58,
            "Under Review",
        ),
        ResultRecord::new(
            "SR-003",
            "TOI-715b Detection",
            "Classification",
            "2023-10-13",
            "Rocky Planet",
            78.9,
            0.84,
            "Confirmed",
        ),
        ResultRecord::new(
            "SR-004",
            "TRAPPIST-1e Analysis",
            "System Study",
            "2023-10-12",
            "Rocky Planet",
            95.7,
            0.91,
            "Published",
        ),
        ResultRecord::new(
            "SR-005",
            "Proxima Centauri b",
            "Classification",
            "2023-10-11",
            "Rocky Planet",
            89.4,
            0.67,
            "Confirmed",
        ),
        ResultRecord::new(
            "SR-006",
            "WASP-121b Study",
            "Atmospheric",
            "2023-10-10",
            "Hot Jupiter",
            99.2,
            0.01,
            "Published",
        ),
    ]
}
