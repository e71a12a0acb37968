//! # hwplot - 数值作业结果绘图工具
//!
//! 将各次作业附带的绘图脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `line` - 折线图（分组、多文件叠加、参考线）
//! - `hist` - 直方图 + 均值/±1 标准差参考线
//! - `trajectory` - 二维/三维粒子轨迹
//! - `compare` - 多子图对比
//! - `recipe` - 内置作业绘图脚本
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── data/    (表格读取、选列、统计)
//!   │     └── render/  (plotters 绘图与数据导出)
//!   ├── utils/      (终端输出、进度条)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod data;
mod error;
mod render;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
