//! # 图表样式
//!
//! 图像格式、标题/坐标轴/尺寸、配色与参考线标注。
//!
//! ## 依赖关系
//! - 被 `render/` 各绘图模块使用
//! - 被 `commands/` 用于构造样式
//! - 使用 `plotters` 颜色类型

use crate::error::{HwplotError, Result};

use plotters::style::RGBColor;
use std::path::Path;

/// 输出图像格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    /// 矢量图
    Svg,
}

impl OutputFormat {
    /// 根据扩展名推断
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(HwplotError::UnsupportedFormat(format!(
                "Cannot write image '{}' (use .png, .jpg or .svg)",
                path.display()
            ))),
        }
    }

    pub fn is_vector(self) -> bool {
        self == OutputFormat::Svg
    }
}

/// 数据点标记形状
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
}

/// 单幅图（或子图）的文字与尺寸设置
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub grid: bool,
    pub markers: bool,
    /// 按曲线序号循环使用；为空时全部为圆点
    pub marker_shapes: Vec<Marker>,
}

impl FigureStyle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            width: 1000,
            height: 600,
            grid: true,
            markers: false,
            marker_shapes: Vec::new(),
        }
    }

    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    /// 开启标记并指定各曲线的标记形状
    pub fn marker_shapes(mut self, shapes: &[Marker]) -> Self {
        self.markers = true;
        self.marker_shapes = shapes.to_vec();
        self
    }

    pub fn marker_for(&self, i: usize) -> Marker {
        if self.marker_shapes.is_empty() {
            Marker::Circle
        } else {
            self.marker_shapes[i % self.marker_shapes.len()]
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// 叠加在坐标系上的参考标注
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// 竖直虚线
    VLine {
        x: f64,
        color: RGBColor,
        label: Option<String>,
    },
    /// 水平虚线
    HLine {
        y: f64,
        color: RGBColor,
        label: Option<String>,
    },
    /// 文字，纵向位置为 y 轴范围的比例
    Note {
        x: f64,
        y_fraction: f64,
        text: String,
        color: RGBColor,
    },
}

/// tab10 配色
const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// 第 i 条曲线的颜色（循环使用）
pub fn series_color(i: usize) -> RGBColor {
    PALETTE[i % PALETTE.len()]
}

/// 解析颜色名或 `#rrggbb`
pub fn parse_color(input: &str) -> Result<RGBColor> {
    let name = input.trim().to_lowercase();
    let color = match name.as_str() {
        "blue" => RGBColor(0, 0, 255),
        "green" => RGBColor(0, 128, 0),
        "red" => RGBColor(255, 0, 0),
        "purple" => RGBColor(128, 0, 128),
        "orange" => RGBColor(255, 165, 0),
        "black" => RGBColor(0, 0, 0),
        "gray" | "grey" => RGBColor(128, 128, 128),
        "cyan" => RGBColor(0, 255, 255),
        "magenta" => RGBColor(255, 0, 255),
        hex if hex.starts_with('#') && hex.len() == 7 && hex.is_ascii() => {
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16)
                    .map_err(|_| HwplotError::InvalidArgument(format!("Invalid color '{}'", input)))
            };
            RGBColor(channel(1..3)?, channel(3..5)?, channel(5..7)?)
        }
        _ => {
            return Err(HwplotError::InvalidArgument(format!(
                "Invalid color '{}'. Use a name (blue, green, red, purple, ...) or #rrggbb",
                input
            )))
        }
    };
    Ok(color)
}

/// 为数据范围留出边距；退化范围扩展为单位宽度
pub(crate) fn padded(lo: f64, hi: f64, fraction: f64) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi <= lo {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = (hi - lo) * fraction;
    (lo - pad, hi + pad)
}
