//! # 数据模块
//!
//! 加载、选择与汇总：文件 → 表格 → 曲线/统计量。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `render/` 使用
//! - 子模块: table, loader, select, stats

pub mod loader;
pub mod select;
pub mod stats;
pub mod table;

pub use loader::{load_series, load_table, InputFormat, LoadOptions};
pub use stats::{Histogram, Summary};
pub use table::{ColumnSpec, Curve, Curve3, Series, Table};
