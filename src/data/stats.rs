//! # 统计量
//!
//! 均值、总体标准差与等宽直方图分箱。
//!
//! 空输入时 `mean`/`std_dev` 返回 NaN，直方图分箱报错。
//!
//! ## 依赖关系
//! - 被 `commands/hist.rs`, `commands/recipe.rs` 使用
//! - 被 `render/histogram.rs` 使用

use crate::error::{HwplotError, Result};

/// 算术平均
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// 总体标准差（除以 N）
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// 汇总统计
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

pub fn summarize(values: &[f64]) -> Summary {
    Summary {
        count: values.len(),
        mean: mean(values),
        std_dev: std_dev(values),
        min: values.iter().copied().fold(f64::NAN, f64::min),
        max: values.iter().copied().fold(f64::NAN, f64::max),
    }
}

/// 等宽直方图
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// 分箱边界，长度为 bins + 1
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// 在 [min, max] 上划分 `bins` 个等宽分箱，最后一个分箱右闭
    ///
    /// 所有样本相同时使用 [v - 0.5, v + 0.5]。非有限值不计入。
    pub fn from_samples(values: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(HwplotError::InvalidArgument(
                "histogram needs at least one bin".to_string(),
            ));
        }

        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Err(HwplotError::InvalidArgument(
                "histogram needs at least one finite sample".to_string(),
            ));
        }

        let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        // 按边界校正浮点误差，保证样本落在 [edges[i], edges[i+1]) 内
        for v in finite {
            let mut idx = (((v - lo) / width) as usize).min(bins - 1);
            if v < edges[idx] && idx > 0 {
                idx -= 1;
            } else if idx + 1 < bins && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        Ok(Histogram { edges, counts })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// 第 i 个分箱的 [左, 右) 边界
    pub fn bin_range(&self, i: usize) -> (f64, f64) {
        (self.edges[i], self.edges[i + 1])
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_std_known_series() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((mean(&values) - 3.0).abs() < 1e-12);
        assert!((std_dev(&values) - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((std_dev(&values) - 1.414).abs() < 1e-3);
    }

    #[test]
    fn test_empty_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(std_dev(&[]).is_nan());
        let s = summarize(&[]);
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan());
    }

    #[test]
    fn test_summarize() {
        let s = summarize(&[4.0, -1.0, 3.0]);
        assert_eq!(s.count, 3);
        assert_eq!(s.min, -1.0);
        assert_eq!(s.max, 4.0);
        assert!((s.mean - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_counts_all_samples() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 * 0.37).collect();
        let hist = Histogram::from_samples(&values, 50).unwrap();
        assert_eq!(hist.bins(), 50);
        assert_eq!(hist.edges.len(), 51);
        assert_eq!(hist.total(), 100);
    }

    #[test]
    fn test_histogram_max_in_last_bin() {
        let hist = Histogram::from_samples(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(hist.counts, vec![1, 1, 1, 2]);
        assert_eq!(hist.bin_range(0), (0.0, 1.0));
    }

    #[test]
    fn test_histogram_constant_sample() {
        let hist = Histogram::from_samples(&[2.0, 2.0, 2.0], 2).unwrap();
        assert_eq!(hist.edges, vec![1.5, 2.0, 2.5]);
        assert_eq!(hist.counts, vec![0, 3]);
    }

    #[test]
    fn test_histogram_bins_agree_with_edges() {
        for bins in [3, 7, 10, 50] {
            for n in 1..200 {
                let values: Vec<f64> = (0..n).map(|i| 0.7 + 0.1 * i as f64).collect();
                let hist = Histogram::from_samples(&values, bins).unwrap();
                assert_eq!(hist.total(), n);

                let mut expected = vec![0usize; bins];
                for &v in &values {
                    let idx = (0..bins)
                        .find(|&i| {
                            let (l, r) = hist.bin_range(i);
                            v >= l && (v < r || i == bins - 1)
                        })
                        .unwrap();
                    expected[idx] += 1;
                }
                assert_eq!(hist.counts, expected, "bins={} n={}", bins, n);
            }
        }
    }

    #[test]
    fn test_histogram_invalid() {
        assert!(Histogram::from_samples(&[1.0], 0).is_err());
        assert!(Histogram::from_samples(&[], 10).is_err());
        assert!(Histogram::from_samples(&[f64::NAN], 10).is_err());
    }
}
