//! # line 子命令实现
//!
//! 文件 → 表格 → 曲线 → 折线图。
//!
//! ## 功能
//! - 多个 y 列或按分类列分组
//! - 多个输入文件叠加（列结构相同）
//! - 参考线、圆点标记
//! - 可选导出绘图数据
//!
//! ## 依赖关系
//! - 使用 `cli/line.rs` 定义的参数
//! - 使用 `data/` 加载与选择
//! - 使用 `render/line.rs`, `render/export.rs`

use crate::cli::line::LineArgs;
use crate::data::select;
use crate::data::{load_table, ColumnSpec, Curve};
use crate::error::Result;
use crate::render::{self, export, Overlay};
use crate::utils::output;

use plotters::style::RGBColor;
use std::path::Path;

const REFERENCE_COLOR: RGBColor = RGBColor(90, 90, 90);

/// 执行 line 命令
pub fn execute(args: LineArgs) -> Result<()> {
    output::print_header("Line Plot");

    let options = args.input.load_options();
    let x = ColumnSpec::parse(&args.x);
    let group = args.group_by.as_deref().map(ColumnSpec::parse);
    let multi_file = args.inputs.len() > 1;

    let mut curves: Vec<Curve> = Vec::new();
    let mut x_name = String::new();
    let mut y_names: Vec<String> = Vec::new();

    for (i, path) in args.inputs.iter().enumerate() {
        let table = load_table(path, &options)?;
        output::print_info(&format!(
            "Loaded '{}': {} rows x {} columns",
            path.display(),
            table.n_rows(),
            table.n_cols()
        ));

        let ys: Vec<ColumnSpec> = if args.y.is_empty() {
            let mut exclude = vec![x.clone()];
            exclude.extend(group.clone());
            select::numeric_columns(&table, &exclude)?
        } else {
            args.y.iter().map(|y| ColumnSpec::parse(y)).collect()
        };

        if i == 0 {
            x_name = table.name_of(&x)?.to_string();
            y_names = ys
                .iter()
                .map(|y| table.name_of(y).map(str::to_string))
                .collect::<Result<_>>()?;
        }

        let column_labels = if multi_file { &[][..] } else { &args.labels[..] };
        let file_curves = select::curves(&table, &x, &ys, group.as_ref(), column_labels)?;

        if multi_file {
            let file_label = args
                .labels
                .get(i)
                .cloned()
                .unwrap_or_else(|| file_stem(path));
            curves.extend(prefix_labels(file_curves, &file_label));
        } else {
            curves.extend(file_curves);
        }
    }

    let overlays = reference_lines(&args.vline, &args.hline);

    let default_title = format!("{} vs {}", y_names.join(", "), x_name);
    let style = args
        .figure
        .style(&default_title)
        .labels(
            args.x_label.clone().unwrap_or(x_name),
            args.y_label.clone().unwrap_or_else(|| y_names.join(", ")),
        )
        .markers(args.markers);

    render::render_lines(&curves, &overlays, &style, &args.output)?;
    output::print_saved(&format!("{} curve(s)", curves.len()), &args.output);

    if let Some(ref path) = args.export_data {
        export::export_curves(&curves, path)?;
        output::print_saved("plotted data", path);
    }

    Ok(())
}

/// 多文件叠加时以文件标签区分曲线
fn prefix_labels(curves: Vec<Curve>, file_label: &str) -> Vec<Curve> {
    let single = curves.len() == 1;
    curves
        .into_iter()
        .map(|mut c| {
            c.label = if single {
                file_label.to_string()
            } else {
                format!("{}: {}", file_label, c.label)
            };
            c
        })
        .collect()
}

fn reference_lines(vlines: &[f64], hlines: &[f64]) -> Vec<Overlay> {
    let v = vlines.iter().map(|&x| Overlay::VLine {
        x,
        color: REFERENCE_COLOR,
        label: None,
    });
    let h = hlines.iter().map(|&y| Overlay::HLine {
        y,
        color: REFERENCE_COLOR,
        label: None,
    });
    v.chain(h).collect()
}

pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("data")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_labels_single_curve() {
        let curves = vec![Curve::new("Root", vec![(1.0, 2.0)])];
        let out = prefix_labels(curves, "Newton's Method");
        assert_eq!(out[0].label, "Newton's Method");
    }

    #[test]
    fn test_prefix_labels_many_curves() {
        let curves = vec![
            Curve::new("a", vec![]),
            Curve::new("b", vec![]),
        ];
        let out = prefix_labels(curves, "run1");
        assert_eq!(out[0].label, "run1: a");
        assert_eq!(out[1].label, "run1: b");
    }

    #[test]
    fn test_reference_lines() {
        let overlays = reference_lines(&[1.0], &[2.0, 3.0]);
        assert_eq!(overlays.len(), 3);
        assert!(matches!(overlays[0], Overlay::VLine { x, .. } if x == 1.0));
        assert!(matches!(overlays[2], Overlay::HLine { y, .. } if y == 3.0));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(
            file_stem(Path::new("data/secant_iteration_data.csv")),
            "secant_iteration_data"
        );
    }
}
