//! # 统一错误处理模块
//!
//! 定义 hwplot 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// hwplot 统一错误类型
#[derive(Error, Debug)]
pub enum HwplotError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Shape mismatch in {path} (line {line}): expected {expected} fields, found {found}")]
    ShapeMismatch {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("No data rows in {path}")]
    EmptyInput { path: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 列选择错误
    // ─────────────────────────────────────────────────────────────
    #[error("Column '{column}' not found (available: {available})")]
    ColumnNotFound { column: String, available: String },

    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Rendering failed: {0}")]
    Render(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl HwplotError {
    /// 包装 plotters 后端错误
    pub fn render<E: std::fmt::Debug>(e: E) -> Self {
        HwplotError::Render(format!("{:?}", e))
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, HwplotError>;
