//! # line 子命令 CLI 定义
//!
//! 从 CSV/空白分隔文件绘制一条或多条折线，可按分类列分组。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/line.rs`

use super::common::{FigureArgs, InputArgs};

use clap::Args;
use std::path::PathBuf;

/// line 子命令参数
#[derive(Args, Debug)]
pub struct LineArgs {
    /// Input data files (several files with the same columns are overlaid)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output image (.png, .jpg or .svg)
    #[arg(short, long, default_value = "line_plot.png")]
    pub output: PathBuf,

    /// X column (name or zero-based index)
    #[arg(short, long, default_value = "0")]
    pub x: String,

    /// Y column(s) (name or zero-based index, repeatable; default: every other numeric column)
    #[arg(short, long)]
    pub y: Vec<String>,

    /// Categorical column to split rows into one curve per value
    #[arg(short, long)]
    pub group_by: Option<String>,

    /// Legend labels (one per y column, or one per input file when several files are given)
    #[arg(long, value_delimiter = ',')]
    pub labels: Vec<String>,

    /// Draw circle markers at data points
    #[arg(long, default_value_t = false)]
    pub markers: bool,

    /// Vertical reference line at this x (repeatable)
    #[arg(long, allow_negative_numbers = true)]
    pub vline: Vec<f64>,

    /// Horizontal reference line at this y (repeatable)
    #[arg(long, allow_negative_numbers = true)]
    pub hline: Vec<f64>,

    /// X axis label (default: x column name)
    #[arg(long)]
    pub x_label: Option<String>,

    /// Y axis label (default: y column name)
    #[arg(long)]
    pub y_label: Option<String>,

    /// Also write the plotted points as CSV (label,x,y)
    #[arg(long)]
    pub export_data: Option<PathBuf>,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub figure: FigureArgs,
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_negative_reference_lines() {
        let cli = Cli::try_parse_from([
            "hwplot", "line", "p.csv", "--vline", "-2", "--hline", "-0.5", "--vline", "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Line(args) => {
                assert_eq!(args.vline, vec![-2.0, 3.0]);
                assert_eq!(args.hline, vec![-0.5]);
                assert_eq!(args.inputs.len(), 1);
            }
            _ => panic!("expected line subcommand"),
        }
    }
}
