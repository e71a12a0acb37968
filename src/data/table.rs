//! # 表格数据模型
//!
//! 从分隔文本文件加载的内存表格：有序的命名列，每列为数值列或分类列。
//!
//! ## 依赖关系
//! - 被 `data/loader.rs`, `data/select.rs` 使用
//! - 被 `commands/` 和 `render/` 使用（通过 `Curve`/`Curve3`）

use crate::error::{HwplotError, Result};

use std::fmt;

/// 单列数据
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// 全部单元格都能解析为浮点数
    Numeric(Vec<f64>),
    /// 含有非数值单元格（方法名、网格类型等标签）
    Categorical(Vec<String>),
}

impl Column {
    /// 根据内容推断列类型
    pub fn infer(cells: Vec<String>) -> Self {
        let parsed: Option<Vec<f64>> = cells.iter().map(|c| c.trim().parse().ok()).collect();
        match parsed {
            Some(values) => Column::Numeric(values),
            None => Column::Categorical(cells.into_iter().map(|c| c.trim().to_string()).collect()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }

    /// 单元格文本（数值按 `Display` 输出）
    pub fn text(&self, row: usize) -> String {
        match self {
            Column::Numeric(v) => v[row].to_string(),
            Column::Categorical(v) => v[row].clone(),
        }
    }

    fn take(&self, rows: &[usize]) -> Column {
        match self {
            Column::Numeric(v) => Column::Numeric(rows.iter().map(|&r| v[r]).collect()),
            Column::Categorical(v) => {
                Column::Categorical(rows.iter().map(|&r| v[r].clone()).collect())
            }
        }
    }
}

/// 列选择：名称或从 0 开始的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    Name(String),
    Index(usize),
}

impl ColumnSpec {
    /// 纯数字解析为位置，其余视为列名
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<usize>() {
            Ok(i) => ColumnSpec::Index(i),
            Err(_) => ColumnSpec::Name(input.trim().to_string()),
        }
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSpec::Name(n) => write!(f, "{}", n),
            ColumnSpec::Index(i) => write!(f, "#{}", i),
        }
    }
}

impl From<&str> for ColumnSpec {
    fn from(s: &str) -> Self {
        ColumnSpec::parse(s)
    }
}

/// 命名、等长列组成的表格
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(names: Vec<String>, columns: Vec<Column>) -> Result<Self> {
        if names.len() != columns.len() {
            return Err(HwplotError::InvalidArgument(format!(
                "{} column names for {} columns",
                names.len(),
                columns.len()
            )));
        }
        if let Some(first) = columns.first() {
            let n = first.len();
            if let Some((i, c)) = columns.iter().enumerate().find(|(_, c)| c.len() != n) {
                return Err(HwplotError::InvalidArgument(format!(
                    "column '{}' has {} rows, expected {}",
                    names[i],
                    c.len(),
                    n
                )));
            }
        }
        Ok(Table { names, columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// 将列选择解析为列位置
    pub fn resolve(&self, spec: &ColumnSpec) -> Result<usize> {
        let found = match spec {
            ColumnSpec::Name(name) => self.names.iter().position(|n| n == name),
            ColumnSpec::Index(i) if *i < self.columns.len() => Some(*i),
            ColumnSpec::Index(_) => None,
        };
        found.ok_or_else(|| HwplotError::ColumnNotFound {
            column: spec.to_string(),
            available: self.names.join(", "),
        })
    }

    pub fn column(&self, spec: &ColumnSpec) -> Result<&Column> {
        Ok(&self.columns[self.resolve(spec)?])
    }

    pub fn column_at(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn name_of(&self, spec: &ColumnSpec) -> Result<&str> {
        Ok(&self.names[self.resolve(spec)?])
    }

    /// 数值列切片；分类列报错
    pub fn numeric(&self, spec: &ColumnSpec) -> Result<&[f64]> {
        let idx = self.resolve(spec)?;
        match &self.columns[idx] {
            Column::Numeric(v) => Ok(v),
            Column::Categorical(_) => Err(HwplotError::NotNumeric(self.names[idx].clone())),
        }
    }

    /// 按给定顺序取出若干行
    pub fn take_rows(&self, rows: &[usize]) -> Table {
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take(rows)).collect(),
        }
    }

    pub fn series(&self, spec: &ColumnSpec) -> Result<Series> {
        Ok(Series::new(self.name_of(spec)?, self.numeric(spec)?.to_vec()))
    }
}

/// 有序数值序列
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Series {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// 二维曲线：(x, y, label)
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Curve {
            label: label.into(),
            points,
        }
    }

    /// 由两条等长序列配对构造
    pub fn from_xy(label: impl Into<String>, x: &[f64], y: &[f64]) -> Self {
        Curve::new(label, x.iter().copied().zip(y.iter().copied()).collect())
    }
}

/// 三维曲线（轨迹）
#[derive(Debug, Clone, PartialEq)]
pub struct Curve3 {
    pub label: String,
    pub points: Vec<(f64, f64, f64)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["n".into(), "avg_time".into(), "grid_type".into()],
            vec![
                Column::Numeric(vec![10.0, 50.0, 10.0]),
                Column::Numeric(vec![1.5, 7.25, 2.0]),
                Column::Categorical(vec!["Grid1".into(), "Grid1".into(), "Grid2".into()]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_infer_column_types() {
        let numeric = Column::infer(vec!["1".into(), " 2.5 ".into(), "-3e2".into()]);
        assert_eq!(numeric, Column::Numeric(vec![1.0, 2.5, -300.0]));

        let labels = Column::infer(vec!["1".into(), "Grid2".into()]);
        assert!(!labels.is_numeric());
    }

    #[test]
    fn test_resolve_by_name_and_index() {
        let table = sample();
        assert_eq!(table.resolve(&"avg_time".into()).unwrap(), 1);
        assert_eq!(table.resolve(&ColumnSpec::Index(2)).unwrap(), 2);
        assert!(matches!(
            table.resolve(&"missing".into()),
            Err(HwplotError::ColumnNotFound { .. })
        ));
        assert!(table.resolve(&ColumnSpec::Index(3)).is_err());
    }

    #[test]
    fn test_numeric_rejects_categorical() {
        let table = sample();
        assert_eq!(table.numeric(&"n".into()).unwrap(), &[10.0, 50.0, 10.0]);
        assert!(matches!(
            table.numeric(&"grid_type".into()),
            Err(HwplotError::NotNumeric(_))
        ));
    }

    #[test]
    fn test_unequal_columns_rejected() {
        let result = Table::new(
            vec!["a".into(), "b".into()],
            vec![Column::Numeric(vec![1.0]), Column::Numeric(vec![1.0, 2.0])],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_take_rows_keeps_order() {
        let table = sample().take_rows(&[2, 0]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.numeric(&"avg_time".into()).unwrap(), &[2.0, 1.5]);
        assert_eq!(table.column(&"grid_type".into()).unwrap().text(0), "Grid2");
    }

    #[test]
    fn test_series_by_index() {
        let table = sample();
        assert_eq!(table.names(), &["n", "avg_time", "grid_type"]);
        let series = table.series(&ColumnSpec::Index(1)).unwrap();
        assert_eq!(series, Series::new("avg_time", vec![1.5, 7.25, 2.0]));
        assert!(table.series(&"grid_type".into()).is_err());
    }
}
