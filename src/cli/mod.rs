//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `line`: 折线图（可分组、多文件叠加）
//! - `hist`: 直方图 + 均值/标准差参考线
//! - `trajectory`: 二维/三维轨迹
//! - `compare`: 多子图对比
//! - `recipe`: 内置作业绘图脚本
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: common, line, hist, trajectory, compare, recipe

pub mod common;
pub mod compare;
pub mod hist;
pub mod line;
pub mod recipe;
pub mod trajectory;

use clap::{Parser, Subcommand};

/// hwplot - 数值作业结果绘图工具
#[derive(Parser)]
#[command(name = "hwplot")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Charts for numerical homework results", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Plot one or more columns as lines, optionally grouped by a categorical column
    Line(line::LineArgs),

    /// Histogram of one column with mean and ±1 SD reference lines
    Hist(hist::HistArgs),

    /// Plot a 2D or 3D particle trajectory
    Trajectory(trajectory::TrajectoryArgs),

    /// Multi-panel comparison, one panel per y column
    Compare(compare::CompareArgs),

    /// Run a built-in homework plotting recipe
    Recipe(recipe::RecipeArgs),
}
