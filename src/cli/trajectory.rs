//! # trajectory 子命令 CLI 定义
//!
//! 绘制粒子轨迹文件（`t x y` 或 `t x y z`，空白分隔）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/trajectory.rs`

use super::common::FigureArgs;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 轨迹维度
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Dims {
    /// Infer from the field count (3 = 2D, 4 = 3D)
    #[default]
    Auto,
    /// t x y
    #[value(name = "2")]
    Two,
    /// t x y z
    #[value(name = "3")]
    Three,
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dims::Auto => write!(f, "auto"),
            Dims::Two => write!(f, "2"),
            Dims::Three => write!(f, "3"),
        }
    }
}

/// trajectory 子命令参数
#[derive(Args, Debug)]
pub struct TrajectoryArgs {
    /// Trajectory file with whitespace-separated `t x y [z]` rows
    pub input: PathBuf,

    /// Output image (.png, .jpg or .svg)
    #[arg(short, long, default_value = "trajectory.png")]
    pub output: PathBuf,

    /// Trajectory dimension
    #[arg(short, long, value_enum, default_value = "auto")]
    pub dims: Dims,

    /// Legend label
    #[arg(long)]
    pub label: Option<String>,

    /// Also write the plotted points as CSV
    #[arg(long)]
    pub export_data: Option<PathBuf>,

    #[command(flatten)]
    pub figure: FigureArgs,
}
