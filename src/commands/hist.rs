//! # hist 子命令实现
//!
//! 读取一列样本，计算均值与总体标准差，绘制带参考线的直方图。
//!
//! ## 依赖关系
//! - 使用 `cli/hist.rs` 定义的参数
//! - 使用 `data/stats.rs` 计算统计量
//! - 使用 `render/histogram.rs`, `render/export.rs`
//! - 被 `commands/recipe.rs` 复用（`plot_samples`）

use crate::cli::hist::HistArgs;
use crate::data::stats::{self, Histogram, Summary};
use crate::data::{load_series, ColumnSpec, Series};
use crate::error::Result;
use crate::render::export::{self, SummaryRow};
use crate::render::{self, parse_color, FigureStyle};
use crate::utils::output;

use plotters::style::RGBColor;
use std::path::Path;
use tabled::{Table, Tabled};

/// 统计表格行
#[derive(Debug, Clone, Tabled)]
struct StatRow {
    #[tabled(rename = "Series")]
    name: String,
    #[tabled(rename = "N")]
    count: usize,
    #[tabled(rename = "Mean")]
    mean: String,
    #[tabled(rename = "Std Dev")]
    std_dev: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
}

impl StatRow {
    fn new(name: &str, s: &Summary) -> Self {
        Self {
            name: name.to_string(),
            count: s.count,
            mean: format!("{:.6}", s.mean),
            std_dev: format!("{:.6}", s.std_dev),
            min: format!("{:.6}", s.min),
            max: format!("{:.6}", s.max),
        }
    }
}

/// 直方图绘制参数
pub struct HistogramPlot<'a> {
    pub bins: usize,
    pub color: RGBColor,
    /// None 表示不画参考线
    pub ref_color: Option<RGBColor>,
    pub style: &'a FigureStyle,
    pub output: &'a Path,
}

/// 执行 hist 命令
pub fn execute(args: HistArgs) -> Result<()> {
    output::print_header("Histogram");

    let options = args.input_args.load_options();
    let column = ColumnSpec::parse(&args.column);
    let series = load_series(&args.input, &column, &options)?;
    output::print_info(&format!(
        "Loaded {} samples of '{}' from '{}'",
        series.len(),
        series.name,
        args.input.display()
    ));

    let color = parse_color(&args.color)?;
    let ref_color = if args.no_ref_lines {
        None
    } else {
        Some(parse_color(&args.ref_color)?)
    };

    let default_title = format!("Histogram of {}", series.name);
    let style = args.figure.style(&default_title).labels(
        args.x_label.clone().unwrap_or_else(|| series.name.clone()),
        "Frequency",
    );

    let summary = plot_samples(
        &series,
        &HistogramPlot {
            bins: args.bins,
            color,
            ref_color,
            style: &style,
            output: &args.output,
        },
    )?;

    println!("{}", Table::new([StatRow::new(&series.name, &summary)]));

    if let Some(ref path) = args.export_stats {
        export::export_summary(&[SummaryRow::new(&series.name, &summary)], path)?;
        output::print_saved("summary statistics", path);
    }

    Ok(())
}

/// 汇总样本、打印均值与标准差并绘制直方图
pub fn plot_samples(series: &Series, plot: &HistogramPlot<'_>) -> Result<Summary> {
    let summary = stats::summarize(&series.values);
    output::print_info(&format!("Mean {}: {}", series.name, summary.mean));
    output::print_info(&format!(
        "Standard deviation of {}: {}",
        series.name, summary.std_dev
    ));

    let hist = Histogram::from_samples(&series.values, plot.bins)?;
    if hist.total() < series.len() {
        output::print_warning(&format!(
            "{} non-finite sample(s) of '{}' left out of the histogram",
            series.len() - hist.total(),
            series.name
        ));
    }
    let overlays = plot
        .ref_color
        .map(|c| render::reference_overlays(&summary, c))
        .unwrap_or_default();

    render::render_histogram(&hist, &overlays, plot.color, plot.style, plot.output)?;
    output::print_saved(
        &format!("{} bins, {} samples", hist.bins(), hist.total()),
        plot.output,
    );

    Ok(summary)
}
