//! # 公共 CLI 参数
//!
//! 各绘图子命令共用的输入解析参数与图像参数，通过 `#[command(flatten)]` 嵌入。
//!
//! ## 依赖关系
//! - 被 `cli/line.rs`, `cli/hist.rs`, `cli/trajectory.rs`, `cli/compare.rs` 使用
//! - 转换为 `data::LoadOptions` 与 `render::FigureStyle`

use crate::data::{InputFormat, LoadOptions};
use crate::render::FigureStyle;

use clap::Args;

/// 输入文件解析参数
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input format (auto-detected from extension if not specified)
    #[arg(long, value_enum, default_value = "auto")]
    pub format: InputFormat,

    /// Treat the first line as a header row (default: yes for CSV, no for whitespace files)
    #[arg(long, conflicts_with = "no_header")]
    pub header: bool,

    /// Treat the first line as data
    #[arg(long)]
    pub no_header: bool,

    /// Column names for headerless files, comma separated (e.g. "Iteration,Root")
    #[arg(long, value_delimiter = ',')]
    pub names: Vec<String>,
}

impl InputArgs {
    /// 转换为加载选项
    pub fn load_options(&self) -> LoadOptions {
        let mut options = LoadOptions::new(self.format);
        if self.header {
            options = options.header(true);
        } else if self.no_header {
            options = options.header(false);
        }
        if !self.names.is_empty() {
            options = options.with_names(&self.names);
        }
        options
    }
}

/// 图像参数
#[derive(Args, Debug, Clone)]
pub struct FigureArgs {
    /// Title of the figure
    #[arg(long)]
    pub title: Option<String>,

    /// Figure width in pixels (for PNG/JPEG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG/JPEG) or points (for SVG)
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Hide the background grid
    #[arg(long, default_value_t = false)]
    pub no_grid: bool,
}

impl FigureArgs {
    /// 以给定默认标题构造样式
    pub fn style(&self, default_title: &str) -> FigureStyle {
        FigureStyle::new(self.title.as_deref().unwrap_or(default_title))
            .size(self.width, self.height)
            .grid(!self.no_grid)
    }
}
