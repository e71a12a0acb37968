//! # compare 子命令实现
//!
//! 每个 y 列绘制一个子图，各子图共享 x 列与分组方式。
//!
//! ## 依赖关系
//! - 使用 `cli/compare.rs` 定义的参数
//! - 使用 `data/select.rs` 分组
//! - 使用 `render/panels.rs`, `render/export.rs`

use crate::cli::compare::CompareArgs;
use crate::data::select;
use crate::data::{load_table, ColumnSpec, Table};
use crate::error::Result;
use crate::render::{self, export, FigureStyle, Panel};
use crate::utils::output;

/// 每个子图的最小高度（像素）
const PANEL_MIN_HEIGHT: u32 = 450;

/// 执行 compare 命令
pub fn execute(args: CompareArgs) -> Result<()> {
    output::print_header("Multi-Panel Comparison");

    let table = load_table(&args.input, &args.input_args.load_options())?;
    output::print_info(&format!(
        "Loaded '{}': {} rows x {} columns",
        args.input.display(),
        table.n_rows(),
        table.n_cols()
    ));
    output::print_info(&format!("Columns: {}", table.names().join(", ")));

    let x = ColumnSpec::parse(&args.x);
    let ys: Vec<ColumnSpec> = args.y.iter().map(|y| ColumnSpec::parse(y)).collect();
    let group = args.group_by.as_deref().map(ColumnSpec::parse);

    let x_label = match &args.x_label {
        Some(l) => l.clone(),
        None => table.name_of(&x)?.to_string(),
    };
    let template = FigureStyle::new("")
        .labels(x_label, "")
        .grid(!args.figure.no_grid)
        .markers(args.markers);

    let panels = build_panels(&table, &x, &ys, group.as_ref(), &args.panel_title, &template)?;

    let mut figure = args.figure.style("");
    figure.height = figure.height.max(PANEL_MIN_HEIGHT * panels.len() as u32);

    render::render_panels(&panels, &figure, &args.output)?;
    output::print_saved(&format!("{} panel(s)", panels.len()), &args.output);

    if let Some(ref path) = args.export_data {
        let curves: Vec<_> = panels.iter().flat_map(|p| p.curves.clone()).collect();
        export::export_curves(&curves, path)?;
        output::print_saved("plotted data", path);
    }

    Ok(())
}

/// 每个 y 列一个子图
///
/// 子图标题取 `titles` 中对应项，缺省为 `"<y> vs <x>"`；y 轴标题为列名。
pub fn build_panels(
    table: &Table,
    x: &ColumnSpec,
    ys: &[ColumnSpec],
    group: Option<&ColumnSpec>,
    titles: &[String],
    template: &FigureStyle,
) -> Result<Vec<Panel>> {
    let x_name = table.name_of(x)?;
    ys.iter()
        .enumerate()
        .map(|(i, y)| -> Result<Panel> {
            let y_name = table.name_of(y)?;
            let curves = select::curves(table, x, std::slice::from_ref(y), group, &[])?;
            let mut style = template.clone();
            style.title = titles
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("{} vs {}", y_name, x_name));
            style.y_label = y_name.to_string();
            Ok(Panel::new(style, curves))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{parse_table, LoadOptions};

    #[test]
    fn test_build_panels_grouped() {
        let content = "\
method_name,n,execution_time,absolute_error
trap,10,0.1,0.5
simp,10,0.2,0.05
trap,20,0.3,0.25
";
        let table = parse_table(content, &LoadOptions::default(), "bench.csv").unwrap();
        let panels = build_panels(
            &table,
            &"n".into(),
            &["execution_time".into(), "absolute_error".into()],
            Some(&"method_name".into()),
            &["Execution Time".to_string()],
            &FigureStyle::new("").labels("Intervals", ""),
        )
        .unwrap();

        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].style.title, "Execution Time");
        assert_eq!(panels[1].style.title, "absolute_error vs n");
        assert_eq!(panels[1].style.y_label, "absolute_error");
        assert_eq!(panels[1].style.x_label, "Intervals");
        assert_eq!(panels[0].curves.len(), 2);
        assert_eq!(panels[0].curves[0].points, vec![(10.0, 0.1), (20.0, 0.3)]);
    }
}
