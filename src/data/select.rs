//! # 行选择与分组
//!
//! 按分类字段（方法名、网格类型等）分组或过滤行，并把表格列切成绘图曲线。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `data/table.rs`

use crate::data::table::{ColumnSpec, Curve, Table};
use crate::error::{HwplotError, Result};

/// 同一键值的行集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub rows: Vec<usize>,
}

/// 按键列分组
///
/// 分组顺序为键值首次出现的顺序，组内保持原表行序；
/// 所有行恰好落入一个分组。
pub fn group_by(table: &Table, key: &ColumnSpec) -> Result<Vec<Group>> {
    let column = table.column(key)?;
    let mut groups: Vec<Group> = Vec::new();

    for row in 0..table.n_rows() {
        let value = column.text(row);
        match groups.iter_mut().find(|g| g.key == value) {
            Some(group) => group.rows.push(row),
            None => groups.push(Group {
                key: value,
                rows: vec![row],
            }),
        }
    }

    Ok(groups)
}

/// 取出键列等于 `value` 的子表
pub fn filter_eq(table: &Table, key: &ColumnSpec, value: &str) -> Result<Table> {
    let column = table.column(key)?;
    let rows: Vec<usize> = (0..table.n_rows())
        .filter(|&r| column.text(r) == value)
        .collect();
    Ok(table.take_rows(&rows))
}

/// 除 `exclude` 之外的全部数值列（保持列序）
pub fn numeric_columns(table: &Table, exclude: &[ColumnSpec]) -> Result<Vec<ColumnSpec>> {
    let excluded = exclude
        .iter()
        .map(|s| table.resolve(s))
        .collect::<Result<Vec<usize>>>()?;
    Ok((0..table.n_cols())
        .filter(|i| !excluded.contains(i))
        .filter(|&i| table.column_at(i).map(|c| c.is_numeric()).unwrap_or(false))
        .map(ColumnSpec::Index)
        .collect())
}

/// 将表格切成曲线
///
/// - 不分组：每个 y 列一条曲线，标签取 `labels` 或列名
/// - 分组：每组一条曲线，标签为组键；多个 y 列时为 `"组键 / 列名"`
pub fn curves(
    table: &Table,
    x: &ColumnSpec,
    ys: &[ColumnSpec],
    group: Option<&ColumnSpec>,
    labels: &[String],
) -> Result<Vec<Curve>> {
    if ys.is_empty() {
        return Err(HwplotError::InvalidArgument(
            "at least one y column is required".to_string(),
        ));
    }

    let xs = table.numeric(x)?;

    let Some(key) = group else {
        return ys
            .iter()
            .enumerate()
            .map(|(i, y)| -> Result<Curve> {
                let label = match labels.get(i) {
                    Some(l) => l.clone(),
                    None => table.name_of(y)?.to_string(),
                };
                Ok(Curve::from_xy(label, xs, table.numeric(y)?))
            })
            .collect();
    };

    let groups = group_by(table, key)?;
    let mut out = Vec::with_capacity(groups.len() * ys.len());
    for group in &groups {
        for (i, y) in ys.iter().enumerate() {
            let values = table.numeric(y)?;
            let label = if ys.len() == 1 {
                group.key.clone()
            } else {
                let y_name = match labels.get(i) {
                    Some(l) => l.as_str(),
                    None => table.name_of(y)?,
                };
                format!("{} / {}", group.key, y_name)
            };
            let points = group.rows.iter().map(|&r| (xs[r], values[r])).collect();
            out.push(Curve::new(label, points));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{parse_table, LoadOptions};

    fn benchmark() -> Table {
        let content = "\
method_name,nb_intervals_or_max_depth,absolute_error,execution_time
trapezoidal,10,0.1,0.001
simpson,10,0.01,0.002
trapezoidal,20,0.05,0.003
simpson,20,0.001,0.004
adaptive,5,0.2,0.005
trapezoidal,40,0.02,0.006
";
        parse_table(content, &LoadOptions::default(), "benchmark_results.csv").unwrap()
    }

    #[test]
    fn test_group_by_first_appearance_order() {
        let groups = group_by(&benchmark(), &"method_name".into()).unwrap();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["trapezoidal", "simpson", "adaptive"]);
        assert_eq!(groups[0].rows, vec![0, 2, 5]);
        assert_eq!(groups[1].rows, vec![1, 3]);
    }

    #[test]
    fn test_group_by_partitions_rows() {
        let table = benchmark();
        let groups = group_by(&table, &"method_name".into()).unwrap();
        let mut all: Vec<usize> = groups.iter().flat_map(|g| g.rows.clone()).collect();
        all.sort_unstable();
        assert_eq!(all, (0..table.n_rows()).collect::<Vec<_>>());
        for g in &groups {
            assert!(g.rows.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_group_by_numeric_key() {
        let groups = group_by(&benchmark(), &"nb_intervals_or_max_depth".into()).unwrap();
        assert_eq!(groups[0].key, "10");
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn test_filter_eq() {
        let table = filter_eq(&benchmark(), &"method_name".into(), "simpson").unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(
            table.numeric(&"execution_time".into()).unwrap(),
            &[0.002, 0.004]
        );
    }

    #[test]
    fn test_numeric_columns_excludes_x_and_labels() {
        let cols = numeric_columns(&benchmark(), &["nb_intervals_or_max_depth".into()]).unwrap();
        assert_eq!(cols, vec![ColumnSpec::Index(2), ColumnSpec::Index(3)]);
        assert!(numeric_columns(&benchmark(), &["nope".into()]).is_err());
    }

    #[test]
    fn test_curves_grouped() {
        let table = benchmark();
        let curves = curves(
            &table,
            &"nb_intervals_or_max_depth".into(),
            &["execution_time".into()],
            Some(&"method_name".into()),
            &[],
        )
        .unwrap();
        assert_eq!(curves.len(), 3);
        assert_eq!(curves[0].label, "trapezoidal");
        assert_eq!(
            curves[0].points,
            vec![(10.0, 0.001), (20.0, 0.003), (40.0, 0.006)]
        );
    }

    #[test]
    fn test_curves_grouped_multiple_y() {
        let curves = curves(
            &benchmark(),
            &"nb_intervals_or_max_depth".into(),
            &["execution_time".into(), "absolute_error".into()],
            Some(&"method_name".into()),
            &[],
        )
        .unwrap();
        assert_eq!(curves.len(), 6);
        assert_eq!(curves[1].label, "trapezoidal / absolute_error");
    }

    #[test]
    fn test_curves_ungrouped_labels() {
        let curves = curves(
            &benchmark(),
            &"nb_intervals_or_max_depth".into(),
            &["execution_time".into(), "absolute_error".into()],
            None,
            &["time".to_string()],
        )
        .unwrap();
        assert_eq!(curves[0].label, "time");
        assert_eq!(curves[1].label, "absolute_error");
        assert_eq!(curves[0].points.len(), 6);
    }

    #[test]
    fn test_curves_reject_categorical_y() {
        let result = curves(
            &benchmark(),
            &"nb_intervals_or_max_depth".into(),
            &["method_name".into()],
            None,
            &[],
        );
        assert!(matches!(result, Err(HwplotError::NotNumeric(_))));
    }
}
