//! # recipe 子命令 CLI 定义
//!
//! 内置的作业绘图脚本：文件名、列名、分箱数、颜色都是固定常量。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/recipe.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 内置绘图脚本
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RecipeName {
    /// Temperature profile from tem_out.csv
    TemperatureProfile,
    /// 2D and 3D particle trajectories from traject_2d.txt / traject_3d.txt
    Trajectory,
    /// Grid summation timing per grid type from grid_timing.csv
    GridTiming,
    /// Newton vs secant root convergence
    RootConvergence,
    /// Histograms of mesh edge lengths, vertex areas and triangle areas
    MeshStats,
    /// Polynomial and its derivatives from polynomial_evaluation.txt
    Polynomial,
    /// Execution time and absolute error per integration method
    IntegrationBenchmark,
    /// Execution time vs number of threads (measured values built in)
    ThreadScaling,
}

impl RecipeName {
    pub const ALL: [RecipeName; 8] = [
        RecipeName::TemperatureProfile,
        RecipeName::Trajectory,
        RecipeName::GridTiming,
        RecipeName::RootConvergence,
        RecipeName::MeshStats,
        RecipeName::Polynomial,
        RecipeName::IntegrationBenchmark,
        RecipeName::ThreadScaling,
    ];
}

impl std::fmt::Display for RecipeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeName::TemperatureProfile => write!(f, "temperature-profile"),
            RecipeName::Trajectory => write!(f, "trajectory"),
            RecipeName::GridTiming => write!(f, "grid-timing"),
            RecipeName::RootConvergence => write!(f, "root-convergence"),
            RecipeName::MeshStats => write!(f, "mesh-stats"),
            RecipeName::Polynomial => write!(f, "polynomial"),
            RecipeName::IntegrationBenchmark => write!(f, "integration-benchmark"),
            RecipeName::ThreadScaling => write!(f, "thread-scaling"),
        }
    }
}

/// recipe 子命令参数
#[derive(Args, Debug)]
pub struct RecipeArgs {
    /// Recipe to run
    #[arg(required_unless_present_any = ["all", "list"])]
    pub name: Option<RecipeName>,

    /// Run every recipe, continuing past failures
    #[arg(long, default_value_t = false, conflicts_with = "name")]
    pub all: bool,

    /// List the recipes with their input files
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Directory holding the homework output files
    #[arg(long, env = "HWPLOT_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Directory for the rendered images
    #[arg(long, env = "HWPLOT_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,
}
