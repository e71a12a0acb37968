//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `data/`, `render/`, `utils/`
//! - 子模块: line, hist, trajectory, compare, recipe

pub mod compare;
pub mod hist;
pub mod line;
pub mod recipe;
pub mod trajectory;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Line(args) => line::execute(args),
        Commands::Hist(args) => hist::execute(args),
        Commands::Trajectory(args) => trajectory::execute(args),
        Commands::Compare(args) => compare::execute(args),
        Commands::Recipe(args) => recipe::execute(args),
    }
}
