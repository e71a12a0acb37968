//! # hist 子命令 CLI 定义
//!
//! 绘制单列数值的直方图并标注均值与 ±1 标准差。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/hist.rs`

use super::common::{FigureArgs, InputArgs};

use clap::Args;
use std::path::PathBuf;

/// hist 子命令参数
#[derive(Args, Debug)]
pub struct HistArgs {
    /// Input data file (one value per line, or a table with --column)
    pub input: PathBuf,

    /// Output image (.png, .jpg or .svg)
    #[arg(short, long, default_value = "histogram.png")]
    pub output: PathBuf,

    /// Column holding the samples (name or zero-based index)
    #[arg(short, long, default_value = "0")]
    pub column: String,

    /// Number of bins
    #[arg(short, long, default_value_t = 50)]
    pub bins: usize,

    /// Bar color (name or #rrggbb)
    #[arg(long, default_value = "blue")]
    pub color: String,

    /// Color of the ±1 SD reference lines
    #[arg(long, default_value = "green")]
    pub ref_color: String,

    /// Skip the mean / ±1 SD reference lines
    #[arg(long, default_value_t = false)]
    pub no_ref_lines: bool,

    /// X axis label (default: column name)
    #[arg(long)]
    pub x_label: Option<String>,

    /// Also write the summary statistics as CSV
    #[arg(long)]
    pub export_stats: Option<PathBuf>,

    #[command(flatten)]
    pub input_args: InputArgs,

    #[command(flatten)]
    pub figure: FigureArgs,
}
