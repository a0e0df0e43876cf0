//! 回帰モデル評価のためのメトリクス
//!
//! すべての関数は真の値と予測値のペアを位置で対応付けて評価します。
//! NaNやInfinityなどの非有限値は検査せず、IEEE-754の算術規則に従って
//! そのまま結果に伝播します。

use crate::error::{Error, Result};

/// 入力ベクトルの前提条件を検証
fn validate_inputs(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::DimensionMismatch(format!(
            "真の値と予測値の長さが一致しません: {} vs {}",
            y_true.len(),
            y_pred.len()
        )));
    }

    if y_true.is_empty() {
        return Err(Error::EmptyInput(
            "空のデータで計算することはできません (長さ 0)".to_string(),
        ));
    }

    Ok(())
}

/// 平均二乗誤差（Mean Squared Error）を計算
///
/// # Arguments
/// * `y_true` - 真の値
/// * `y_pred` - 予測値
///
/// # Returns
/// * `Result<f64>` - 平均二乗誤差
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_inputs(y_true, y_pred)?;

    let sum_squared_error = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&true_val, &pred_val)| {
            let error = true_val - pred_val;
            error * error
        })
        .sum::<f64>();

    Ok(sum_squared_error / y_true.len() as f64)
}

/// 平均二乗誤差の平方根（Root Mean Squared Error）を計算
///
/// # Arguments
/// * `y_true` - 真の値
/// * `y_pred` - 予測値
///
/// # Returns
/// * `Result<f64>` - 平均二乗誤差の平方根
pub fn root_mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    let mse = mean_squared_error(y_true, y_pred)?;
    Ok(mse.sqrt())
}

/// 平均絶対誤差（Mean Absolute Error）を計算
///
/// # Arguments
/// * `y_true` - 真の値
/// * `y_pred` - 予測値
///
/// # Returns
/// * `Result<f64>` - 平均絶対誤差
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_inputs(y_true, y_pred)?;

    let sum_absolute_error = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&true_val, &pred_val)| (true_val - pred_val).abs())
        .sum::<f64>();

    Ok(sum_absolute_error / y_true.len() as f64)
}

/// 決定係数（R^2 score）を計算
///
/// 真の値の分散がゼロ（全要素が同一）の場合、比が定義できないため
/// `DegenerateVariance`エラーになります。予測が完全に一致していても同様です。
///
/// # Arguments
/// * `y_true` - 真の値
/// * `y_pred` - 予測値
///
/// # Returns
/// * `Result<f64>` - 決定係数（1が最高、悪化すると負の値になり得る）
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate_inputs(y_true, y_pred)?;

    // 真の値の平均を計算
    let y_mean = y_true.iter().sum::<f64>() / y_true.len() as f64;

    // 全変動（total sum of squares）を計算
    let ss_tot = y_true
        .iter()
        .map(|&true_val| {
            let diff = true_val - y_mean;
            diff * diff
        })
        .sum::<f64>();

    // ss_totが0の場合（全てのy_trueが同じ値）
    if ss_tot == 0.0 {
        return Err(Error::DegenerateVariance(format!(
            "真の値の分散がゼロのため決定係数を計算できません (長さ {})",
            y_true.len()
        )));
    }

    // 残差平方和（residual sum of squares）を計算
    let ss_res = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&true_val, &pred_val)| {
            let error = true_val - pred_val;
            error * error
        })
        .sum::<f64>();

    Ok(1.0 - (ss_res / ss_tot))
}
