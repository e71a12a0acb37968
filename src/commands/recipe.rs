//! # recipe 子命令实现
//!
//! 内置作业绘图脚本。每个脚本都是线性流程：读取固定文件 → 选列/统计 → 绘图 → 写出图像。
//!
//! ## 脚本
//! - `temperature-profile`: tem_out.csv 温度分布
//! - `trajectory`: traject_2d.txt / traject_3d.txt 粒子轨迹
//! - `grid-timing`: grid_timing.csv 按网格类型的求和耗时
//! - `root-convergence`: Newton / Secant 迭代根
//! - `mesh-stats`: 网格边长、顶点面积、三角形面积直方图
//! - `polynomial`: 多项式及其各阶导数
//! - `integration-benchmark`: 各积分方法耗时与误差（双子图）
//! - `thread-scaling`: 线程数与耗时（内置测量值）
//!
//! ## 依赖关系
//! - 使用 `cli/recipe.rs` 定义的参数
//! - 复用 `commands/hist.rs`, `commands/trajectory.rs`, `commands/compare.rs`
//! - 使用 `data/`, `render/`
//! - 使用 `utils/progress.rs`（--all 模式）

use crate::cli::recipe::{RecipeArgs, RecipeName};
use crate::cli::trajectory::Dims;
use crate::commands::hist::{self, HistogramPlot};
use crate::commands::{compare, trajectory};
use crate::data::select;
use crate::data::{load_series, load_table, ColumnSpec, Curve, InputFormat, LoadOptions};
use crate::error::{HwplotError, Result};
use crate::render::style::Marker;
use crate::render::{self, FigureStyle};
use crate::utils::{output, progress};

use plotters::style::RGBColor;
use std::fs;
use std::path::PathBuf;
use tabled::{Table, Tabled};

const BLUE: RGBColor = RGBColor(0, 0, 255);
const GREEN: RGBColor = RGBColor(0, 128, 0);
const RED: RGBColor = RGBColor(255, 0, 0);
const PURPLE: RGBColor = RGBColor(128, 0, 128);

/// 脚本运行目录
struct RecipeContext {
    data_dir: PathBuf,
    output_dir: PathBuf,
}

impl RecipeContext {
    fn input(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    fn output(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}

/// 列表行
#[derive(Debug, Clone, Tabled)]
struct RecipeRow {
    #[tabled(rename = "Recipe")]
    name: String,
    #[tabled(rename = "Inputs")]
    inputs: String,
    #[tabled(rename = "Outputs")]
    outputs: String,
}

/// 读取的数据文件
pub fn recipe_inputs(name: RecipeName) -> &'static [&'static str] {
    match name {
        RecipeName::TemperatureProfile => &["tem_out.csv"],
        RecipeName::Trajectory => &["traject_2d.txt", "traject_3d.txt"],
        RecipeName::GridTiming => &["grid_timing.csv"],
        RecipeName::RootConvergence => &["newton_iteration_data.csv", "secant_iteration_data.csv"],
        RecipeName::MeshStats => &["edge_lengths.txt", "vertex_areas.txt", "triangle_areas.txt"],
        RecipeName::Polynomial => &["polynomial_evaluation.txt"],
        RecipeName::IntegrationBenchmark => &["benchmark_results.csv"],
        RecipeName::ThreadScaling => &[],
    }
}

/// 写出的图像文件
pub fn recipe_outputs(name: RecipeName) -> &'static [&'static str] {
    match name {
        RecipeName::TemperatureProfile => &["temperature_profile.png"],
        RecipeName::Trajectory => &["trajectory_2d.png", "trajectory_3d.png"],
        RecipeName::GridTiming => &["grid_timing.png"],
        RecipeName::RootConvergence => &["root_vs_iterations.png"],
        RecipeName::MeshStats => &[
            "edge_lengths_hist.png",
            "vertex_areas_hist.png",
            "triangle_areas_hist.png",
        ],
        RecipeName::Polynomial => &[
            "polynomial_derivatives_plot.svg",
            "polynomial_derivatives_plot.jpg",
        ],
        RecipeName::IntegrationBenchmark => &["integration_benchmark.png"],
        RecipeName::ThreadScaling => &[
            "thread_scaling_non_adaptive.png",
            "thread_scaling_adaptive.png",
        ],
    }
}

/// 执行 recipe 命令
pub fn execute(args: RecipeArgs) -> Result<()> {
    if args.list {
        print_recipe_list();
        return Ok(());
    }

    fs::create_dir_all(&args.output_dir).map_err(|e| HwplotError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let ctx = RecipeContext {
        data_dir: args.data_dir.clone(),
        output_dir: args.output_dir.clone(),
    };

    if args.all {
        return run_all(&ctx);
    }

    let name = args
        .name
        .ok_or_else(|| HwplotError::InvalidArgument("no recipe given".to_string()))?;
    output::print_header(&format!("Recipe: {}", name));
    let outputs = run_recipe(name, &ctx)?;
    output::print_done(&format!("{} figure(s) written", outputs.len()));
    Ok(())
}

fn print_recipe_list() {
    output::print_header("Built-in Recipes");
    let rows: Vec<RecipeRow> = RecipeName::ALL
        .iter()
        .map(|&name| RecipeRow {
            name: name.to_string(),
            inputs: list_or_dash(recipe_inputs(name)),
            outputs: recipe_outputs(name).join(", "),
        })
        .collect();
    println!("{}", Table::new(&rows));
}

fn list_or_dash(items: &[&str]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// 依次运行全部脚本，失败不会中断后续脚本
fn run_all(ctx: &RecipeContext) -> Result<()> {
    output::print_header("Running All Recipes");

    let pb = progress::create_progress_bar(RecipeName::ALL.len() as u64, "Rendering");
    let mut written = 0usize;
    let mut failures: Vec<(RecipeName, HwplotError)> = Vec::new();

    for name in RecipeName::ALL {
        pb.set_message(name.to_string());
        match pb.suspend(|| run_recipe(name, ctx)) {
            Ok(outputs) => written += outputs.len(),
            Err(e) => failures.push((name, e)),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    output::print_info(&format!(
        "{} recipe(s) succeeded, {} failed, {} figure(s) written",
        RecipeName::ALL.len() - failures.len(),
        failures.len(),
        written
    ));

    if failures.is_empty() {
        output::print_done("All recipes finished");
        return Ok(());
    }

    for (name, err) in &failures {
        output::print_error(&format!("{}: {}", name, err));
    }
    Err(HwplotError::Other(format!(
        "{} of {} recipes failed",
        failures.len(),
        RecipeName::ALL.len()
    )))
}

fn run_recipe(name: RecipeName, ctx: &RecipeContext) -> Result<Vec<PathBuf>> {
    match name {
        RecipeName::TemperatureProfile => temperature_profile(ctx),
        RecipeName::Trajectory => particle_trajectories(ctx),
        RecipeName::GridTiming => grid_timing(ctx),
        RecipeName::RootConvergence => root_convergence(ctx),
        RecipeName::MeshStats => mesh_stats(ctx),
        RecipeName::Polynomial => polynomial(ctx),
        RecipeName::IntegrationBenchmark => integration_benchmark(ctx),
        RecipeName::ThreadScaling => thread_scaling(ctx),
    }
}

fn lines(curves: &[Curve], style: &FigureStyle, out: PathBuf) -> Result<PathBuf> {
    render::render_lines(curves, &[], style, &out)?;
    output::print_saved(&style.title, &out);
    Ok(out)
}

// ─────────────────────────────────────────────────────────────
// 各脚本
// ─────────────────────────────────────────────────────────────

fn temperature_profile(ctx: &RecipeContext) -> Result<Vec<PathBuf>> {
    let data = load_table(&ctx.input("tem_out.csv"), &LoadOptions::new(InputFormat::Csv))?;
    let x = data.numeric(&"x".into())?;
    let t = data.numeric(&"temperature".into())?;

    let style = FigureStyle::new("Temperature Profile").labels("x", "Temperature");
    let out = lines(
        &[Curve::from_xy("", x, t)],
        &style,
        ctx.output("temperature_profile.png"),
    )?;
    Ok(vec![out])
}

fn particle_trajectories(ctx: &RecipeContext) -> Result<Vec<PathBuf>> {
    let mut outputs = Vec::new();
    for (file, dims, title, out) in [
        (
            "traject_2d.txt",
            Dims::Two,
            "2D Particle Trajectory",
            "trajectory_2d.png",
        ),
        (
            "traject_3d.txt",
            Dims::Three,
            "3D Particle Trajectory",
            "trajectory_3d.png",
        ),
    ] {
        let traj = trajectory::load_trajectory(&ctx.input(file), dims, None)?;
        let style = FigureStyle::new(title)
            .labels("X Position", "Y Position")
            .grid(false);
        let out = ctx.output(out);
        trajectory::plot_trajectory(&traj, &style, &out)?;
        outputs.push(out);
    }
    Ok(outputs)
}

fn grid_timing(ctx: &RecipeContext) -> Result<Vec<PathBuf>> {
    let data = load_table(&ctx.input("grid_timing.csv"), &LoadOptions::new(InputFormat::Csv))?;
    let grid_type: ColumnSpec = "grid_type".into();

    let mut curves = Vec::new();
    for grid in ["Grid1", "Grid2", "Grid3"] {
        let rows = select::filter_eq(&data, &grid_type, grid)?;
        curves.push(Curve::from_xy(
            grid,
            rows.numeric(&"n".into())?,
            rows.numeric(&"avg_time".into())?,
        ));
    }

    let style = FigureStyle::new("Grid Summation Time for Grid1, Grid2, and Grid3")
        .labels("Grid Size (n)", "Average Time (microseconds)")
        .markers(true);
    Ok(vec![lines(&curves, &style, ctx.output("grid_timing.png"))?])
}

fn root_convergence(ctx: &RecipeContext) -> Result<Vec<PathBuf>> {
    let options = LoadOptions::new(InputFormat::Csv)
        .header(false)
        .with_names(&["Iteration", "Root"]);

    let mut curves = Vec::new();
    for (file, label) in [
        ("newton_iteration_data.csv", "Newton's Method"),
        ("secant_iteration_data.csv", "Secant Method"),
    ] {
        let data = load_table(&ctx.input(file), &options)?;
        curves.push(Curve::from_xy(
            label,
            data.numeric(&"Iteration".into())?,
            data.numeric(&"Root".into())?,
        ));
    }

    let style = FigureStyle::new("Root as a Function of Iteration for Newton and Secant Methods")
        .labels("Iteration Number", "Computed Root")
        .marker_shapes(&[Marker::Circle, Marker::Square]);
    Ok(vec![lines(&curves, &style, ctx.output("root_vs_iterations.png"))?])
}

fn mesh_stats(ctx: &RecipeContext) -> Result<Vec<PathBuf>> {
    let options = LoadOptions::new(InputFormat::Whitespace).expect_fields(1);
    let mut outputs = Vec::new();

    for (file, title, x_label, color, ref_color, out) in [
        (
            "edge_lengths.txt",
            "Histogram of Edge Lengths",
            "Edge Length",
            BLUE,
            GREEN,
            "edge_lengths_hist.png",
        ),
        (
            "vertex_areas.txt",
            "Histogram of Vertex Areas",
            "Vertex Area",
            GREEN,
            BLUE,
            "vertex_areas_hist.png",
        ),
        (
            "triangle_areas.txt",
            "Histogram of Triangle Areas",
            "Triangle Area",
            RED,
            PURPLE,
            "triangle_areas_hist.png",
        ),
    ] {
        let series = load_series(&ctx.input(file), &ColumnSpec::Index(0), &options)?;
        let style = FigureStyle::new(title)
            .labels(x_label, "Frequency")
            .size(800, 600)
            .grid(false);
        let out = ctx.output(out);
        hist::plot_samples(
            &series,
            &HistogramPlot {
                bins: 50,
                color,
                ref_color: Some(ref_color),
                style: &style,
                output: &out,
            },
        )?;
        outputs.push(out);
    }
    Ok(outputs)
}

fn polynomial(ctx: &RecipeContext) -> Result<Vec<PathBuf>> {
    const LABELS: [&str; 6] = ["P(x)", "P'(x)", "P''(x)", "P'''(x)", "P''''(x)", "P'''''(x)"];

    let options = LoadOptions::new(InputFormat::Whitespace).header(true);
    let data = load_table(&ctx.input("polynomial_evaluation.txt"), &options)?;
    let x = ColumnSpec::Index(0);
    let ys = select::numeric_columns(&data, std::slice::from_ref(&x))?;
    if ys.len() > LABELS.len() {
        return Err(HwplotError::ShapeMismatch {
            path: ctx.input("polynomial_evaluation.txt").display().to_string(),
            line: 1,
            expected: LABELS.len() + 1,
            found: data.n_cols(),
        });
    }
    let labels: Vec<String> = LABELS.iter().map(|s| s.to_string()).collect();
    let curves = select::curves(&data, &x, &ys, None, &labels)?;

    let style = FigureStyle::new("Polynomial and Its Derivatives").labels("x", "Value");
    let mut outputs = Vec::new();
    for out in recipe_outputs(RecipeName::Polynomial) {
        outputs.push(lines(&curves, &style, ctx.output(out))?);
    }
    Ok(outputs)
}

fn integration_benchmark(ctx: &RecipeContext) -> Result<Vec<PathBuf>> {
    let data = load_table(
        &ctx.input("benchmark_results.csv"),
        &LoadOptions::new(InputFormat::Csv),
    )?;

    let template = FigureStyle::new("")
        .labels("Number of Intervals or Max Depth", "")
        .grid(false);
    let mut panels = compare::build_panels(
        &data,
        &"nb_intervals_or_max_depth".into(),
        &["execution_time".into(), "absolute_error".into()],
        Some(&"method_name".into()),
        &[
            "Execution Time for Different Integration Methods".to_string(),
            "Absolute Error for Different Integration Methods".to_string(),
        ],
        &template,
    )?;
    for (panel, y_label) in panels.iter_mut().zip(["Execution Time (s)", "Absolute Error"]) {
        panel.style.y_label = y_label.to_string();
    }

    let figure = FigureStyle::new("").size(1500, 1000);
    let out = ctx.output("integration_benchmark.png");
    render::render_panels(&panels, &figure, &out)?;
    output::print_saved("Integration benchmark", &out);
    Ok(vec![out])
}

fn thread_scaling(ctx: &RecipeContext) -> Result<Vec<PathBuf>> {
    const THREADS: [f64; 5] = [1.0, 2.0, 4.0, 8.0, 16.0];

    let non_adaptive = [
        (
            "Non-Adaptive, n=1000",
            [0.0008471, 0.0003768, 0.0004757, 0.0009306, 0.0016714],
        ),
        (
            "Non-Adaptive, n=10000",
            [0.0003719, 0.000544, 0.0004746, 0.0007564, 0.0016953],
        ),
        (
            "Non-Adaptive, n=100000",
            [0.0023142, 0.0021816, 0.0011967, 0.0012227, 0.0013177],
        ),
    ];
    let adaptive = [
        (
            "Adaptive, tol=0.001",
            [0.0006574, 0.0000599, 0.000065, 0.0002045, 0.0001938],
        ),
        (
            "Adaptive, tol=1e-6",
            [0.0001722, 0.0002058, 0.0002142, 0.000256, 0.0002857],
        ),
    ];

    let to_curves = |runs: &[(&str, [f64; 5])]| -> Vec<Curve> {
        runs.iter()
            .map(|(label, times)| Curve::from_xy(*label, &THREADS, times))
            .collect()
    };

    let mut outputs = Vec::new();
    for (title, curves, out) in [
        (
            "Non-Adaptive Execution Time vs Number of Threads",
            to_curves(&non_adaptive),
            "thread_scaling_non_adaptive.png",
        ),
        (
            "Adaptive Execution Time vs Number of Threads",
            to_curves(&adaptive),
            "thread_scaling_adaptive.png",
        ),
    ] {
        let style = FigureStyle::new(title)
            .labels("Number of Threads", "Execution Time (s)")
            .size(1000, 500)
            .markers(true);
        outputs.push(lines(&curves, &style, ctx.output(out))?);
    }
    Ok(outputs)
}
