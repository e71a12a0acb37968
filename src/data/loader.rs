//! # 分隔文本加载器
//!
//! 将作业程序输出的数据文件读入 `Table`。
//!
//! ## 支持格式
//! ```text
//! CSV（逗号分隔，默认带表头）:
//!   n,avg_time,grid_type
//!   10,1.52,Grid1
//!
//! 空白分隔（固定字段数，默认无表头，# 开头为注释）:
//!   0.0 1.0 0.0
//!   0.01 0.99 0.01
//! ```
//!
//! 字段数不一致、非数值字段、空文件都会报错，不会返回部分表格。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `commands/recipe.rs` 使用
//! - 使用 `data/table.rs`
//! - 使用 `csv` 库解析 CSV

use crate::data::table::{Column, ColumnSpec, Series, Table};
use crate::error::{HwplotError, Result};

use clap::ValueEnum;
use std::fs;
use std::path::Path;

/// 输入文件格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Detect from extension (.csv = CSV, otherwise whitespace)
    #[default]
    Auto,
    /// Comma-separated values
    Csv,
    /// Whitespace-separated numeric fields
    Whitespace,
}

impl InputFormat {
    /// 将 `Auto` 解析为具体格式
    pub fn resolve(self, source: &str) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let is_csv = Path::new(source)
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false);
                if is_csv {
                    InputFormat::Csv
                } else {
                    InputFormat::Whitespace
                }
            }
            other => other,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Auto => write!(f, "auto"),
            InputFormat::Csv => write!(f, "csv"),
            InputFormat::Whitespace => write!(f, "whitespace"),
        }
    }
}

/// 加载选项
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    format: InputFormat,
    /// None 表示按格式取默认值（CSV 有表头，空白分隔无表头）
    has_header: Option<bool>,
    column_names: Option<Vec<String>>,
    expected_fields: Option<usize>,
}

impl LoadOptions {
    pub fn new(format: InputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// 设置是否带表头
    pub fn header(mut self, has_header: bool) -> Self {
        self.has_header = Some(has_header);
        self
    }

    /// 为无表头文件指定列名
    pub fn with_names<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.column_names = Some(names.iter().map(|s| s.as_ref().to_string()).collect());
        self
    }

    /// 要求每行固定字段数
    pub fn expect_fields(mut self, n: usize) -> Self {
        self.expected_fields = Some(n);
        self
    }
}

/// 读取文件并解析为表格
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    if !path.exists() {
        return Err(HwplotError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| HwplotError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_table(&content, options, &path.display().to_string())
}

/// 读取单列数值序列（如每行一个值的文件）
pub fn load_series(path: &Path, column: &ColumnSpec, options: &LoadOptions) -> Result<Series> {
    let table = load_table(path, options)?;
    let mut series = table.series(column)?;
    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
        if table.n_cols() == 1 {
            series.name = stem.to_string();
        }
    }
    Ok(series)
}

/// 从字符串内容解析表格
pub fn parse_table(content: &str, options: &LoadOptions, source: &str) -> Result<Table> {
    let format = options.format.resolve(source);
    let has_header = options
        .has_header
        .unwrap_or(format == InputFormat::Csv);

    let (header, rows) = match format {
        InputFormat::Csv => parse_csv_rows(content, has_header, source)?,
        _ => parse_whitespace_rows(content, has_header, source)?,
    };

    if rows.is_empty() {
        return Err(HwplotError::EmptyInput {
            path: source.to_string(),
        });
    }

    let width = rows[0].len();
    if let Some(expected) = options.expected_fields {
        if width != expected {
            return Err(HwplotError::ShapeMismatch {
                path: source.to_string(),
                line: first_data_line(content, has_header),
                expected,
                found: width,
            });
        }
    }

    let names = match (&options.column_names, header) {
        (Some(names), _) => {
            if names.len() != width {
                return Err(HwplotError::InvalidArgument(format!(
                    "{} column names given for {} fields in {}",
                    names.len(),
                    width,
                    source
                )));
            }
            names.clone()
        }
        (None, Some(header)) => header,
        (None, None) => (0..width).map(|i| format!("col{}", i)).collect(),
    };

    let mut cells: Vec<Vec<String>> = vec![Vec::with_capacity(rows.len()); width];
    for row in rows {
        for (col, value) in cells.iter_mut().zip(row) {
            col.push(value);
        }
    }

    let columns = cells.into_iter().map(Column::infer).collect();
    Table::new(names, columns)
}

type RawRows = (Option<Vec<String>>, Vec<Vec<String>>);

/// CSV 解析（严格字段数）
fn parse_csv_rows(content: &str, has_header: bool, source: &str) -> Result<RawRows> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(false)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let header = if has_header {
        Some(
            rdr.headers()
                .map_err(|e| csv_error(e, source))?
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    } else {
        None
    };

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| csv_error(e, source))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok((header, rows))
}

/// 将字段数不一致的 CSV 错误转换为 ShapeMismatch
fn csv_error(e: csv::Error, source: &str) -> HwplotError {
    if let csv::ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = e.kind()
    {
        return HwplotError::ShapeMismatch {
            path: source.to_string(),
            line: pos.as_ref().map(|p| p.line() as usize).unwrap_or(0),
            expected: *expected_len as usize,
            found: *len as usize,
        };
    }
    HwplotError::CsvError(e)
}

/// 空白分隔解析（逐行，字段数固定，全部为数值）
fn parse_whitespace_rows(content: &str, has_header: bool, source: &str) -> Result<RawRows> {
    let mut header: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut width: Option<usize> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();

        if has_header && header.is_none() {
            width = Some(fields.len());
            header = Some(fields.iter().map(|s| s.to_string()).collect());
            continue;
        }

        let expected = *width.get_or_insert(fields.len());
        if fields.len() != expected {
            return Err(HwplotError::ShapeMismatch {
                path: source.to_string(),
                line: line_no,
                expected,
                found: fields.len(),
            });
        }

        if let Some(bad) = fields.iter().find(|f| f.parse::<f64>().is_err()) {
            return Err(HwplotError::ParseError {
                format: "whitespace".to_string(),
                path: source.to_string(),
                reason: format!("line {}: '{}' is not a number", line_no, bad),
            });
        }

        rows.push(fields.iter().map(|s| s.to_string()).collect());
    }

    Ok((header, rows))
}

/// 第一条数据行的行号（用于报错）
fn first_data_line(content: &str, has_header: bool) -> usize {
    content
        .lines()
        .enumerate()
        .filter(|(_, l)| {
            let l = l.trim();
            !l.is_empty() && !l.starts_with('#')
        })
        .nth(if has_header { 1 } else { 0 })
        .map(|(i, _)| i + 1)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_with_header() {
        let content = "x,temperature\n-1,0\n0,1\n1,0\n";
        let table = parse_table(content, &LoadOptions::default(), "tem_out.csv").unwrap();
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.names(), &["x", "temperature"]);
        assert_eq!(
            table.numeric(&"temperature".into()).unwrap(),
            &[0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_parse_csv_mixed_columns() {
        let content = "n,avg_time,grid_type\n10,1.5,Grid1\n50,7.2,Grid1\n10,2.1,Grid2\n";
        let table = parse_table(content, &LoadOptions::default(), "grid_timing.csv").unwrap();
        assert_eq!(table.n_rows(), 3);
        assert!(table.column(&"n".into()).unwrap().is_numeric());
        assert!(!table.column(&"grid_type".into()).unwrap().is_numeric());
    }

    #[test]
    fn test_parse_headerless_csv_with_names() {
        let content = "1,2.5\n2,2.25\n3,2.2361\n";
        let options = LoadOptions::new(InputFormat::Csv)
            .header(false)
            .with_names(&["Iteration", "Root"]);
        let table = parse_table(content, &options, "newton.csv").unwrap();
        assert_eq!(table.n_rows(), 3);
        assert_eq!(
            table.numeric(&"Iteration".into()).unwrap(),
            &[1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_parse_csv_unequal_lengths() {
        let content = "a,b\n1,2\n3\n";
        let err = parse_table(content, &LoadOptions::default(), "bad.csv").unwrap_err();
        match err {
            HwplotError::ShapeMismatch {
                expected, found, ..
            } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_whitespace_fixed_arity() {
        let content = "0.0 1.0 0.0\n0.1 1.1 0.2\n\n# trailing comment\n0.2 1.2 0.4\n";
        let options = LoadOptions::new(InputFormat::Whitespace).expect_fields(3);
        let table = parse_table(content, &options, "traject_2d.txt").unwrap();
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.names(), &["col0", "col1", "col2"]);
        assert_eq!(
            table.numeric(&ColumnSpec::Index(2)).unwrap(),
            &[0.0, 0.2, 0.4]
        );
    }

    #[test]
    fn test_parse_whitespace_tab_header() {
        let content = "x\tP(x)\tP'(x)\n0\t1\t0\n0.5\t1.25\t1\n";
        let options = LoadOptions::new(InputFormat::Whitespace).header(true);
        let table = parse_table(content, &options, "polynomial_evaluation.txt").unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.names(), &["x", "P(x)", "P'(x)"]);
    }

    #[test]
    fn test_whitespace_wrong_field_count() {
        let content = "1 2 3\n4 5\n";
        let err = parse_table(content, &LoadOptions::default(), "t.txt").unwrap_err();
        assert!(matches!(
            err,
            HwplotError::ShapeMismatch {
                line: 2,
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_whitespace_non_numeric() {
        let content = "1 2\n3 abc\n";
        let err = parse_table(content, &LoadOptions::default(), "t.txt").unwrap_err();
        assert!(matches!(err, HwplotError::ParseError { .. }));
    }

    #[test]
    fn test_expected_fields_mismatch() {
        let content = "0 1 2 3\n";
        let options = LoadOptions::default().expect_fields(3);
        let err = parse_table(content, &options, "traject_2d.txt").unwrap_err();
        assert!(matches!(
            err,
            HwplotError::ShapeMismatch {
                line: 1,
                expected: 3,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_input() {
        let err = parse_table("# nothing\n\n", &LoadOptions::default(), "e.txt").unwrap_err();
        assert!(matches!(err, HwplotError::EmptyInput { .. }));
        let err = parse_table("a,b\n", &LoadOptions::default(), "e.csv").unwrap_err();
        assert!(matches!(err, HwplotError::EmptyInput { .. }));
    }

    #[test]
    fn test_wrong_name_count() {
        let options = LoadOptions::new(InputFormat::Csv)
            .header(false)
            .with_names(&["only_one"]);
        assert!(parse_table("1,2\n", &options, "x.csv").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_table(
            Path::new("definitely/not/here.csv"),
            &LoadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, HwplotError::FileNotFound { .. }));
    }
}
