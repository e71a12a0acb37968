//! # trajectory 子命令实现
//!
//! 读取 `t x y` / `t x y z` 轨迹文件，二维用折线图，三维用投影图。
//!
//! ## 依赖关系
//! - 使用 `cli/trajectory.rs` 定义的参数
//! - 使用 `data/loader.rs`（空白分隔，固定字段数）
//! - 使用 `render/line.rs`, `render/trajectory.rs`
//! - 被 `commands/recipe.rs` 复用（`plot_trajectory`）

use crate::cli::trajectory::{Dims, TrajectoryArgs};
use crate::data::{load_table, ColumnSpec, Curve, Curve3, InputFormat, LoadOptions, Table};
use crate::error::{HwplotError, Result};
use crate::render::{self, export, FigureStyle};
use crate::utils::output;

use std::path::Path;

/// 解析后的轨迹
#[derive(Debug, Clone, PartialEq)]
pub enum Trajectory {
    Planar(Curve),
    Spatial(Curve3),
}

impl Trajectory {
    pub fn len(&self) -> usize {
        match self {
            Trajectory::Planar(c) => c.points.len(),
            Trajectory::Spatial(c) => c.points.len(),
        }
    }
}

/// 执行 trajectory 命令
pub fn execute(args: TrajectoryArgs) -> Result<()> {
    output::print_header("Particle Trajectory");

    let trajectory = load_trajectory(&args.input, args.dims, args.label.as_deref())?;
    output::print_info(&format!(
        "Loaded {} samples from '{}'",
        trajectory.len(),
        args.input.display()
    ));

    let default_title = match trajectory {
        Trajectory::Planar(_) => "2D Particle Trajectory",
        Trajectory::Spatial(_) => "3D Particle Trajectory",
    };
    let style = args
        .figure
        .style(default_title)
        .labels("X Position", "Y Position");

    plot_trajectory(&trajectory, &style, &args.output)?;

    if let Some(ref path) = args.export_data {
        match &trajectory {
            Trajectory::Planar(curve) => export::export_curves(std::slice::from_ref(curve), path)?,
            Trajectory::Spatial(curve) => export::export_curve3(curve, path)?,
        }
        output::print_saved("plotted data", path);
    }

    Ok(())
}

/// 读取轨迹文件
pub fn load_trajectory(path: &Path, dims: Dims, label: Option<&str>) -> Result<Trajectory> {
    let mut options = LoadOptions::new(InputFormat::Whitespace).header(false);
    options = match dims {
        Dims::Auto => options,
        Dims::Two => options.expect_fields(3),
        Dims::Three => options.expect_fields(4),
    };
    let table = load_table(path, &options)?;
    trajectory_from_table(&table, label)
}

/// 从 `t x y [z]` 表格构造轨迹（时间列不参与绘图）
pub fn trajectory_from_table(table: &Table, label: Option<&str>) -> Result<Trajectory> {
    let col = |i: usize| table.numeric(&ColumnSpec::Index(i));
    match table.n_cols() {
        3 => Ok(Trajectory::Planar(Curve::from_xy(
            label.unwrap_or("2D Trajectory"),
            col(1)?,
            col(2)?,
        ))),
        4 => {
            let (x, y, z) = (col(1)?, col(2)?, col(3)?);
            let points = x
                .iter()
                .zip(y)
                .zip(z)
                .map(|((&x, &y), &z)| (x, y, z))
                .collect();
            Ok(Trajectory::Spatial(Curve3 {
                label: label.unwrap_or("3D Trajectory").to_string(),
                points,
            }))
        }
        n => Err(HwplotError::InvalidArgument(format!(
            "trajectory rows need 3 (t x y) or 4 (t x y z) fields, found {}",
            n
        ))),
    }
}

/// 绘制轨迹
pub fn plot_trajectory(trajectory: &Trajectory, style: &FigureStyle, output_path: &Path) -> Result<()> {
    match trajectory {
        Trajectory::Planar(curve) => {
            render::render_lines(std::slice::from_ref(curve), &[], style, output_path)?
        }
        Trajectory::Spatial(curve) => {
            render::render_trajectory_3d(curve, style, "Z Position", output_path)?
        }
    }
    output::print_saved(&format!("{} points", trajectory.len()), output_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_table;

    fn table(content: &str) -> Table {
        parse_table(
            content,
            &LoadOptions::new(InputFormat::Whitespace),
            "traject.txt",
        )
        .unwrap()
    }

    #[test]
    fn test_planar_trajectory_drops_time() {
        let t = table("0 1 2\n0.1 3 4\n");
        match trajectory_from_table(&t, None).unwrap() {
            Trajectory::Planar(c) => {
                assert_eq!(c.label, "2D Trajectory");
                assert_eq!(c.points, vec![(1.0, 2.0), (3.0, 4.0)]);
            }
            other => panic!("expected planar trajectory, got {:?}", other),
        }
    }

    #[test]
    fn test_spatial_trajectory() {
        let t = table("0 1 2 3\n0.1 4 5 6\n0.2 7 8 9\n");
        let traj = trajectory_from_table(&t, Some("particle")).unwrap();
        assert_eq!(traj.len(), 3);
        match traj {
            Trajectory::Spatial(c) => {
                assert_eq!(c.label, "particle");
                assert_eq!(c.points[2], (7.0, 8.0, 9.0));
            }
            other => panic!("expected spatial trajectory, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_arity() {
        let t = table("0 1\n1 2\n");
        assert!(trajectory_from_table(&t, None).is_err());
    }
}
