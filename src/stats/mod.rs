//! 記述統計モジュール
//!
//! 平均、分散、標準偏差、分位数などの基本統計量を提供します。

use crate::error::{Error, Result};

/// 記述統計量をまとめた構造体
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// データ数
    pub count: usize,
    /// 平均値
    pub mean: f64,
    /// 標準偏差（不偏推定量）
    pub std: f64,
    /// 最小値
    pub min: f64,
    /// 第1四分位点 (25%)
    pub q1: f64,
    /// 中央値
    pub median: f64,
    /// 第3四分位点 (75%)
    pub q3: f64,
    /// 最大値
    pub max: f64,
}

/// 平均値を計算
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::EmptyInput(
            "平均値の計算には少なくとも1つのデータが必要です (長さ 0)".into(),
        ));
    }

    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// 分散を計算（不偏推定量）
pub fn variance(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::EmptyInput(
            "分散の計算には少なくとも1つのデータが必要です (長さ 0)".into(),
        ));
    }

    if data.len() < 2 {
        return Err(Error::InsufficientData(
            "分散の計算には少なくとも2つのデータポイントが必要です".into(),
        ));
    }

    let m = mean(data)?;
    let sum_squared_diff = data.iter().map(|&x| (x - m).powi(2)).sum::<f64>();

    Ok(sum_squared_diff / (data.len() - 1) as f64)
}

/// 標準偏差を計算（不偏推定量）
pub fn std(data: &[f64]) -> Result<f64> {
    Ok(variance(data)?.sqrt())
}

/// データの基本統計量を計算
///
/// # 例
/// ```
/// use regmetrs::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let desc = stats::describe(&data).unwrap();
/// assert_eq!(desc.mean, 3.0);
/// assert_eq!(desc.median, 3.0);
/// ```
pub fn describe(data: &[f64]) -> Result<DescriptiveStats> {
    if data.is_empty() {
        return Err(Error::EmptyInput(
            "記述統計量の計算には少なくとも1つのデータが必要です (長さ 0)".into(),
        ));
    }

    let count = data.len();
    let mean_val = mean(data)?;

    // 標準偏差（データが1つの場合は0とする）
    let std_val = if count > 1 { std(data)? } else { 0.0 };

    // データをソートして分位数を計算
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let min = sorted[0];
    let max = sorted[count - 1];

    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let q1 = percentile(&sorted, 0.25);
    let q3 = percentile(&sorted, 0.75);

    Ok(DescriptiveStats {
        count,
        mean: mean_val,
        std: std_val,
        min,
        q1,
        median,
        q3,
        max,
    })
}

/// ソート済みデータからパーセンタイルを計算（線形補間）
fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    let n = sorted_data.len();
    let idx = p * (n - 1) as f64;
    let idx_floor = idx.floor() as usize;
    let idx_ceil = idx.ceil() as usize;

    if idx_floor == idx_ceil {
        return sorted_data[idx_floor];
    }

    let weight_ceil = idx - idx_floor as f64;
    let weight_floor = 1.0 - weight_ceil;

    sorted_data[idx_floor] * weight_floor + sorted_data[idx_ceil] * weight_ceil
}
