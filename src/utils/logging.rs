//! # 诊断日志
//!
//! 初始化 `tracing-subscriber`，日志写到 stderr，不干扰表格输出。
//!
//! 默认级别 `warn`，`--verbose` 时为 `debug`；设置了 `RUST_LOG` 时以其为准。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use tracing_subscriber::EnvFilter;

/// 初始化日志
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化（例如测试中）时静默忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
