//! # 绘图模块
//!
//! 将曲线、直方图与轨迹渲染为 PNG/JPEG/SVG 图像。
//!
//! ## 子模块
//! - `style`: 图像格式、样式、配色、参考线
//! - `line`: 折线图
//! - `histogram`: 直方图
//! - `trajectory`: 三维轨迹
//! - `panels`: 多子图对比
//! - `export`: 绘图数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `data/` 的 Curve, Curve3, Histogram, Summary

pub mod export;
pub mod histogram;
pub mod line;
pub mod panels;
pub mod style;
pub mod trajectory;

pub use histogram::{reference_overlays, render_histogram};
pub use line::render_lines;
pub use panels::{render_panels, Panel};
pub use style::{parse_color, FigureStyle, Overlay};
pub use trajectory::render_trajectory_3d;
