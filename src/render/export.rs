//! # 绘图数据导出
//!
//! 将绘制的曲线与统计量写成 CSV，便于核对图像背后的数值。
//! 输出只取决于输入数据，相同输入重复运行得到逐字节相同的文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `csv` 与 `serde` 序列化

use crate::data::{Curve, Curve3, Summary};
use crate::error::{HwplotError, Result};

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct CurveRow<'a> {
    label: &'a str,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct Curve3Row<'a> {
    label: &'a str,
    x: f64,
    y: f64,
    z: f64,
}

/// 一行汇总统计
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryRow {
    pub fn new(name: impl Into<String>, summary: &Summary) -> Self {
        Self {
            name: name.into(),
            count: summary.count,
            mean: summary.mean,
            std_dev: summary.std_dev,
            min: summary.min,
            max: summary.max,
        }
    }
}

/// 写出曲线数据（label, x, y）
pub fn write_curves_csv<W: Write>(writer: W, curves: &[Curve]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for curve in curves {
        for &(x, y) in &curve.points {
            wtr.serialize(CurveRow {
                label: &curve.label,
                x,
                y,
            })?;
        }
    }
    if curves.iter().all(|c| c.points.is_empty()) {
        wtr.write_record(["label", "x", "y"])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// 写出三维曲线数据（label, x, y, z）
pub fn write_curve3_csv<W: Write>(writer: W, curve: &Curve3) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if curve.points.is_empty() {
        wtr.write_record(["label", "x", "y", "z"])?;
    }
    for &(x, y, z) in &curve.points {
        wtr.serialize(Curve3Row {
            label: &curve.label,
            x,
            y,
            z,
        })?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// 写出汇总统计
pub fn write_summary_csv<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// 导出曲线数据到文件
pub fn export_curves(curves: &[Curve], output_path: &Path) -> Result<()> {
    write_curves_csv(create(output_path)?, curves)
}

/// 导出三维曲线数据到文件
pub fn export_curve3(curve: &Curve3, output_path: &Path) -> Result<()> {
    write_curve3_csv(create(output_path)?, curve)
}

/// 导出汇总统计到文件
pub fn export_summary(rows: &[SummaryRow], output_path: &Path) -> Result<()> {
    write_summary_csv(create(output_path)?, rows)
}

fn create(output_path: &Path) -> Result<File> {
    File::create(output_path).map_err(|e| HwplotError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::summarize;

    fn curves() -> Vec<Curve> {
        vec![
            Curve::new("Grid1", vec![(10.0, 1.5), (50.0, 7.25)]),
            Curve::new("Grid2", vec![(10.0, 2.0)]),
        ]
    }

    #[test]
    fn test_write_curves_csv() {
        let mut buf = Vec::new();
        write_curves_csv(&mut buf, &curves()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "label,x,y");
        assert_eq!(lines[1], "Grid1,10.0,1.5");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_write_curves_csv_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_curves_csv(&mut first, &curves()).unwrap();
        write_curves_csv(&mut second, &curves()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_empty_curves_has_header() {
        let mut buf = Vec::new();
        write_curves_csv(&mut buf, &[Curve::new("empty", vec![])]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "label,x,y\n");
    }

    #[test]
    fn test_write_curve3_csv() {
        let curve = Curve3 {
            label: "3D Trajectory".to_string(),
            points: vec![(1.0, 2.0, 3.5)],
        };
        let mut buf = Vec::new();
        write_curve3_csv(&mut buf, &curve).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "label,x,y,z\n3D Trajectory,1.0,2.0,3.5\n"
        );
    }

    #[test]
    fn test_write_summary_csv() {
        let row = SummaryRow::new("edge_lengths", &summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]));
        let mut buf = Vec::new();
        write_summary_csv(&mut buf, &[row]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("name,count,mean,std_dev,min,max\n"));
        assert!(text.contains("edge_lengths,5,3.0,"));
    }
}
