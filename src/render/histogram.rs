//! # 直方图
//!
//! 绘制等宽分箱直方图，并叠加均值与 ±1 标准差参考线。
//!
//! ## 依赖关系
//! - 被 `commands/hist.rs`, `commands/recipe.rs` 调用
//! - 使用 `data/stats.rs` 的 Histogram, Summary
//! - 使用 `render/line.rs` 的参考线绘制

use crate::data::{Histogram, Summary};
use crate::error::{HwplotError, Result};
use crate::render::line::draw_overlays;
use crate::render::style::{padded, FigureStyle, OutputFormat, Overlay};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 均值与 ±1 SD 的参考线和文字
///
/// 均值为红色，±1 SD 使用 `sd_color`；文字分别位于 80% / 70% 高度。
pub fn reference_overlays(summary: &Summary, sd_color: RGBColor) -> Vec<Overlay> {
    let mean = summary.mean;
    let upper = summary.mean + summary.std_dev;
    let lower = summary.mean - summary.std_dev;
    let marks = [
        (mean, format!("Mean: {:.2}", mean), RED, 0.8),
        (upper, format!("+1 SD: {:.2}", upper), sd_color, 0.7),
        (lower, format!("-1 SD: {:.2}", lower), sd_color, 0.7),
    ];

    let mut overlays = Vec::with_capacity(marks.len() * 2);
    for (x, text, color, y_fraction) in marks {
        if !x.is_finite() {
            continue;
        }
        overlays.push(Overlay::VLine {
            x,
            color,
            label: Some(text.clone()),
        });
        overlays.push(Overlay::Note {
            x,
            y_fraction,
            text,
            color,
        });
    }
    overlays
}

/// 绘制直方图并写入文件
pub fn render_histogram(
    hist: &Histogram,
    overlays: &[Overlay],
    color: RGBColor,
    style: &FigureStyle,
    output_path: &Path,
) -> Result<()> {
    if OutputFormat::from_path(output_path)?.is_vector() {
        let root = SVGBackend::new(output_path, style.dimensions()).into_drawing_area();
        draw_histogram(&root, hist, overlays, color, style)?;
        root.present().map_err(HwplotError::render)?;
    } else {
        let root = BitMapBackend::new(output_path, style.dimensions()).into_drawing_area();
        draw_histogram(&root, hist, overlays, color, style)?;
        root.present().map_err(HwplotError::render)?;
    }
    Ok(())
}

fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    hist: &Histogram,
    overlays: &[Overlay],
    color: RGBColor,
    style: &FigureStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    area.fill(&WHITE).map_err(HwplotError::render)?;

    let (x_min, x_max) = x_bounds(hist, overlays);
    let y_max = (hist.max_count().max(1) as f64) * 1.05;

    let mut chart = ChartBuilder::on(area)
        .caption(style.title.as_str(), ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
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

    let bars: Vec<(f64, f64, f64)> = (0..hist.bins())
        .map(|i| {
            let (l, r) = hist.bin_range(i);
            (l, r, hist.counts[i] as f64)
        })
        .collect();

    chart
        .draw_series(
            bars.iter()
                .map(|&(l, r, c)| Rectangle::new([(l, 0.0), (r, c)], color.mix(0.7).filled())),
        )
        .map_err(HwplotError::render)?;
    chart
        .draw_series(
            bars.iter()
                .map(|&(l, r, c)| Rectangle::new([(l, 0.0), (r, c)], BLACK.stroke_width(1))),
        )
        .map_err(HwplotError::render)?;

    draw_overlays(&mut chart, overlays, (x_min, x_max), (0.0, y_max))?;

    if overlays.iter().any(|o| matches!(o, Overlay::VLine { label: Some(_), .. })) {
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

/// 分箱边界与竖直参考线的 x 范围（含边距）
pub(crate) fn x_bounds(hist: &Histogram, overlays: &[Overlay]) -> (f64, f64) {
    let mut lo = hist.edges.first().copied().unwrap_or(0.0);
    let mut hi = hist.edges.last().copied().unwrap_or(1.0);
    for overlay in overlays {
        if let Overlay::VLine { x, .. } = overlay {
            if x.is_finite() {
                lo = lo.min(*x);
                hi = hi.max(*x);
            }
        }
    }
    padded(lo, hi, 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::summarize;

    #[test]
    fn test_reference_overlays() {
        let summary = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let overlays = reference_overlays(&summary, GREEN);
        assert_eq!(overlays.len(), 6);
        match &overlays[0] {
            Overlay::VLine { x, color, label } => {
                assert!((x - 3.0).abs() < 1e-12);
                assert_eq!(*color, RED);
                assert_eq!(label.as_deref(), Some("Mean: 3.00"));
            }
            other => panic!("unexpected overlay: {:?}", other),
        }
        match &overlays[3] {
            Overlay::Note {
                text, y_fraction, ..
            } => {
                assert_eq!(text, "+1 SD: 4.41");
                assert_eq!(*y_fraction, 0.7);
            }
            other => panic!("unexpected overlay: {:?}", other),
        }
    }

    #[test]
    fn test_x_bounds_cover_reference_lines_of_skewed_sample() {
        let values = [0.0, 0.0, 0.0, 0.0, 10.0];
        let summary = summarize(&values);
        let hist = Histogram::from_samples(&values, 10).unwrap();
        let overlays = reference_overlays(&summary, GREEN);

        let (x_min, x_max) = x_bounds(&hist, &overlays);
        assert!(x_min < -2.0, "x_min = {}", x_min);
        assert!(x_max > 10.0);
    }

    #[test]
    fn test_x_bounds_without_overlays() {
        let hist = Histogram::from_samples(&[0.0, 10.0], 5).unwrap();
        let (x_min, x_max) = x_bounds(&hist, &[]);
        assert!((x_min + 0.5).abs() < 1e-9);
        assert!((x_max - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_reference_overlays_skip_nan() {
        let summary = summarize(&[]);
        assert!(reference_overlays(&summary, BLUE).is_empty());
    }
}
