//! # 统一错误处理模块
//!
//! 定义 exoresults 的所有错误类型，使用 `thiserror` 派生。
//! 过滤谓词与显示映射本身是全函数，不会产生错误；
//! 错误只出现在外壳部分（读取结果文件、解析参数、终端交互）。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// exoresults 统一错误类型
#[derive(Error, Debug)]
pub enum ExoError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Terminal I/O failed")]
    TerminalError {
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 结果文件错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid result record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Duplicate result id on line {line}: {id}")]
    DuplicateId { line: u64, id: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid {kind} filter '{value}'. Expected one of: {options}")]
    InvalidSelector {
        kind: String,
        value: String,
        options: String,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ExoError>;
