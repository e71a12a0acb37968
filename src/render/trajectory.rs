//! # 三维轨迹图
//!
//! 二维轨迹直接使用 `render/line.rs`；三维轨迹使用 `plotters` 的
//! `Cartesian3d` 投影绘制。
//!
//! ## 依赖关系
//! - 被 `commands/trajectory.rs`, `commands/recipe.rs` 调用
//! - 使用 `data/table.rs` 的 Curve3

use crate::data::Curve3;
use crate::error::{HwplotError, Result};
use crate::render::style::{padded, series_color, FigureStyle, OutputFormat};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 绘制三维轨迹并写入文件
pub fn render_trajectory_3d(
    curve: &Curve3,
    style: &FigureStyle,
    z_label: &str,
    output_path: &Path,
) -> Result<()> {
    if OutputFormat::from_path(output_path)?.is_vector() {
        let root = SVGBackend::new(output_path, style.dimensions()).into_drawing_area();
        draw_trajectory_3d(&root, curve, style, z_label)?;
        root.present().map_err(HwplotError::render)?;
    } else {
        let root = BitMapBackend::new(output_path, style.dimensions()).into_drawing_area();
        draw_trajectory_3d(&root, curve, style, z_label)?;
        root.present().map_err(HwplotError::render)?;
    }
    Ok(())
}

fn draw_trajectory_3d<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    curve: &Curve3,
    style: &FigureStyle,
    z_label: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    area.fill(&WHITE).map_err(HwplotError::render)?;

    let (x_range, y_range, z_range) = bounds_3d(&curve.points);

    let mut chart = ChartBuilder::on(area)
        .caption(style.title.as_str(), ("sans-serif", 24).into_font())
        .margin(20)
        .build_cartesian_3d(
            x_range.0..x_range.1,
            y_range.0..y_range.1,
            z_range.0..z_range.1,
        )
        .map_err(HwplotError::render)?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .label_style(("sans-serif", 12))
        .draw()
        .map_err(HwplotError::render)?;

    let color = series_color(0);
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
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(HwplotError::render)?;
    }

    // 三维坐标系没有轴标题，标注在左下角
    let (_, height) = area.dim_in_pixel();
    let axes_note = format!(
        "x: {}   y: {}   z: {}",
        style.x_label, style.y_label, z_label
    );
    area.draw(&Text::new(
        axes_note,
        (20, height as i32 - 30),
        ("sans-serif", 14).into_font().color(&BLACK),
    ))
    .map_err(HwplotError::render)?;

    Ok(())
}

type Range = (f64, f64);

/// 各坐标的范围（含 5% 边距）
pub(crate) fn bounds_3d(points: &[(f64, f64, f64)]) -> (Range, Range, Range) {
    let finite = || {
        points
            .iter()
            .filter(|(x, y, z)| x.is_finite() && y.is_finite() && z.is_finite())
    };
    let axis = |get: fn(&(f64, f64, f64)) -> f64| {
        let lo = finite().map(get).fold(f64::INFINITY, f64::min);
        let hi = finite().map(get).fold(f64::NEG_INFINITY, f64::max);
        padded(lo, hi, 0.05)
    };
    (axis(|p| p.0), axis(|p| p.1), axis(|p| p.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_3d() {
        let points = vec![(0.0, 1.0, 2.0), (10.0, -1.0, 2.0), (f64::NAN, 100.0, 0.0)];
        let (x, y, z) = bounds_3d(&points);
        assert!(x.0 < 0.0 && x.1 > 10.0);
        assert!(y.0 < -1.0 && y.1 > 1.0 && y.1 < 100.0);
        assert_eq!(z, (1.5, 2.5));
    }

    #[test]
    fn test_bounds_3d_empty() {
        let (x, _, _) = bounds_3d(&[]);
        assert_eq!(x, (0.0, 1.0));
    }
}
