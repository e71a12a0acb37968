//! # 多子图对比
//!
//! 将画布竖直等分为 N 个子图，每个子图是一张完整的折线图。
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs`, `commands/recipe.rs` 调用
//! - 使用 `render/line.rs` 绘制每个子图

use crate::data::Curve;
use crate::error::{HwplotError, Result};
use crate::render::line::draw_lines;
use crate::render::style::{FigureStyle, OutputFormat, Overlay};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 单个子图
#[derive(Debug, Clone)]
pub struct Panel {
    pub style: FigureStyle,
    pub curves: Vec<Curve>,
    pub overlays: Vec<Overlay>,
}

impl Panel {
    pub fn new(style: FigureStyle, curves: Vec<Curve>) -> Self {
        Self {
            style,
            curves,
            overlays: Vec::new(),
        }
    }
}

/// 绘制竖直排列的子图并写入文件
///
/// `figure` 提供整幅图的尺寸与总标题（为空时不绘制总标题）。
pub fn render_panels(panels: &[Panel], figure: &FigureStyle, output_path: &Path) -> Result<()> {
    if panels.is_empty() {
        return Err(HwplotError::InvalidArgument(
            "a comparison figure needs at least one panel".to_string(),
        ));
    }

    if OutputFormat::from_path(output_path)?.is_vector() {
        let root = SVGBackend::new(output_path, figure.dimensions()).into_drawing_area();
        draw_panels(&root, panels, figure)?;
        root.present().map_err(HwplotError::render)?;
    } else {
        let root = BitMapBackend::new(output_path, figure.dimensions()).into_drawing_area();
        draw_panels(&root, panels, figure)?;
        root.present().map_err(HwplotError::render)?;
    }
    Ok(())
}

fn draw_panels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &[Panel],
    figure: &FigureStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(HwplotError::render)?;

    let area = if figure.title.is_empty() {
        root.clone()
    } else {
        root.titled(figure.title.as_str(), ("sans-serif", 28))
            .map_err(HwplotError::render)?
    };

    let areas = area.split_evenly((panels.len(), 1));
    for (sub, panel) in areas.iter().zip(panels) {
        draw_lines(sub, &panel.curves, &panel.overlays, &panel.style)?;
    }
    Ok(())
}
