//! # 折线图
//!
//! 使用 `plotters` 在同一坐标系中绘制多条 (x, y, label) 曲线。
//!
//! ## 功能
//! - 坐标范围按数据自动确定（5% 边距）
//! - 图例、可选网格与圆点标记
//! - 参考线与文字标注（`Overlay`）
//! - PNG/JPEG 与 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/line.rs`, `commands/trajectory.rs`, `commands/recipe.rs` 调用
//! - 被 `render/panels.rs` 用于绘制每个子图
//! - 使用 `render/style.rs`

use crate::data::Curve;
use crate::error::{HwplotError, Result};
use crate::render::style::{padded, series_color, FigureStyle, Marker, OutputFormat, Overlay};

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

type Chart2d<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// 绘制折线图并写入文件
pub fn render_lines(
    curves: &[Curve],
    overlays: &[Overlay],
    style: &FigureStyle,
    output_path: &Path,
) -> Result<()> {
    if OutputFormat::from_path(output_path)?.is_vector() {
        let root = SVGBackend::new(output_path, style.dimensions()).into_drawing_area();
        draw_lines(&root, curves, overlays, style)?;
        root.present().map_err(HwplotError::render)?;
    } else {
        let root = BitMapBackend::new(output_path, style.dimensions()).into_drawing_area();
        draw_lines(&root, curves, overlays, style)?;
        root.present().map_err(HwplotError::render)?;
    }
    Ok(())
}

/// 在给定区域上绘制折线图
pub(crate) fn draw_lines<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    curves: &[Curve],
    overlays: &[Overlay],
    style: &FigureStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    area.fill(&WHITE).map_err(HwplotError::render)?;

    let ((x_min, x_max), (y_min, y_max)) = data_bounds(curves, overlays);

    let mut chart = ChartBuilder::on(area)
        .caption(style.title.as_str(), ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(HwplotError::render)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(style.x_label.as_str())
            .y_desc(style.y_label.as_str())
            .x_label_style(("sans-serif", 14))
            .y_label_style(("sans-serif", 14))
            .axis_desc_style(("sans-serif", 16));
        if !style.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(HwplotError::render)?;
    }

    for (i, curve) in curves.iter().enumerate() {
        let color = series_color(i);
        let anno = chart
            .draw_series(LineSeries::new(
                curve.points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(HwplotError::render)?;
        if !curve.label.is_empty() {
            anno.label(curve.label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        }

        if style.markers {
            let fill = color.filled();
            match style.marker_for(i) {
                Marker::Circle => {
                    chart
                        .draw_series(curve.points.iter().map(|&p| Circle::new(p, 4, fill)))
                        .map_err(HwplotError::render)?;
                }
                Marker::Square => {
                    chart
                        .draw_series(curve.points.iter().map(|&p| {
                            EmptyElement::at(p) + Rectangle::new([(-4, -4), (4, 4)], fill)
                        }))
                        .map_err(HwplotError::render)?;
                }
            }
        }
    }

    draw_overlays(&mut chart, overlays, (x_min, x_max), (y_min, y_max))?;

    let has_legend = curves.iter().any(|c| !c.label.is_empty())
        || overlays.iter().any(|o| {
            matches!(
                o,
                Overlay::VLine { label: Some(_), .. } | Overlay::HLine { label: Some(_), .. }
            )
        });
    if has_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 14))
            .draw()
            .map_err(HwplotError::render)?;
    }

    Ok(())
}

/// 绘制参考线与文字标注
pub(crate) fn draw_overlays<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    overlays: &[Overlay],
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    for overlay in overlays {
        match overlay {
            Overlay::VLine { x, color, label } => {
                let points = vec![(*x, y_range.0), (*x, y_range.1)];
                draw_dashed(chart, points, *color, label.as_deref())?;
            }
            Overlay::HLine { y, color, label } => {
                let points = vec![(x_range.0, *y), (x_range.1, *y)];
                draw_dashed(chart, points, *color, label.as_deref())?;
            }
            Overlay::Note {
                x,
                y_fraction,
                text,
                color,
            } => {
                let y = y_range.0 + (y_range.1 - y_range.0) * y_fraction;
                chart
                    .draw_series(std::iter::once(Text::new(
                        text.clone(),
                        (*x, y),
                        ("sans-serif", 13).into_font().color(color),
                    )))
                    .map_err(HwplotError::render)?;
            }
        }
    }
    Ok(())
}

fn draw_dashed<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    points: Vec<(f64, f64)>,
    color: RGBColor,
    label: Option<&str>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let anno = chart
        .draw_series(DashedLineSeries::new(points, 8, 5, color.stroke_width(1)))
        .map_err(HwplotError::render)?;
    if let Some(label) = label {
        anno.label(label).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(1))
        });
    }
    Ok(())
}

/// 所有曲线点与参考线位置的包围盒（含边距）
pub(crate) fn data_bounds(curves: &[Curve], overlays: &[Overlay]) -> ((f64, f64), (f64, f64)) {
    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    for curve in curves {
        for &(x, y) in &curve.points {
            if x.is_finite() && y.is_finite() {
                xs.push(x);
                ys.push(y);
            }
        }
    }
    for overlay in overlays {
        match overlay {
            Overlay::VLine { x, .. } if x.is_finite() => xs.push(*x),
            Overlay::HLine { y, .. } if y.is_finite() => ys.push(*y),
            _ => {}
        }
    }

    let min_max = |v: &[f64]| {
        (
            v.iter().copied().fold(f64::INFINITY, f64::min),
            v.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        )
    };
    let (x_lo, x_hi) = min_max(&xs);
    let (y_lo, y_hi) = min_max(&ys);
    (padded(x_lo, x_hi, 0.05), padded(y_lo, y_hi, 0.05))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_bounds_covers_all_curves() {
        let curves = vec![
            Curve::new("a", vec![(0.0, 1.0), (10.0, 3.0)]),
            Curve::new("b", vec![(2.0, -1.0), (4.0, f64::NAN)]),
        ];
        let ((x0, x1), (y0, y1)) = data_bounds(&curves, &[]);
        assert!(x0 < 0.0 && x1 > 10.0);
        assert!(y0 < -1.0 && y1 > 3.0);
    }

    #[test]
    fn test_data_bounds_includes_reference_lines() {
        let curves = vec![Curve::new("a", vec![(0.0, 0.0), (1.0, 1.0)])];
        let overlays = vec![Overlay::VLine {
            x: 5.0,
            color: RED,
            label: None,
        }];
        let ((_, x1), _) = data_bounds(&curves, &overlays);
        assert!(x1 > 5.0);
    }

    #[test]
    fn test_data_bounds_empty() {
        assert_eq!(data_bounds(&[], &[]), ((0.0, 1.0), (0.0, 1.0)));
    }
}
