//! # compare 子命令 CLI 定义
//!
//! 多子图对比：每个 y 列一个子图，共享 x 列与分组。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/compare.rs`

use super::common::{FigureArgs, InputArgs};

use clap::Args;
use std::path::PathBuf;

/// compare 子命令参数
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Input data file
    pub input: PathBuf,

    /// Output image (.png, .jpg or .svg)
    #[arg(short, long, default_value = "comparison.png")]
    pub output: PathBuf,

    /// X column shared by every panel
    #[arg(short, long)]
    pub x: String,

    /// Y column for each panel (repeatable, one panel per value)
    #[arg(short, long, required = true)]
    pub y: Vec<String>,

    /// Categorical column to split each panel into one curve per value
    #[arg(short, long)]
    pub group_by: Option<String>,

    /// Title of each panel (repeatable, in --y order)
    #[arg(long)]
    pub panel_title: Vec<String>,

    /// X axis label (default: x column name)
    #[arg(long)]
    pub x_label: Option<String>,

    /// Draw circle markers at data points
    #[arg(long, default_value_t = false)]
    pub markers: bool,

    /// Also write the plotted points as CSV
    #[arg(long)]
    pub export_data: Option<PathBuf>,

    #[command(flatten)]
    pub input_args: InputArgs,

    #[command(flatten)]
    pub figure: FigureArgs,
}
