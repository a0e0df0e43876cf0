//! モデル選択モジュール
//!
//! 訓練誤差とテスト誤差を区別して評価するためのデータ分割機能を提供します。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// DataFrameを訓練セットとテストセットに分割
///
/// テストセットの行数は `ceil(行数 * test_fraction)`（ただし最大で行数-1）で、
/// 両方のセットが必ず1行以上になります。
///
/// # Arguments
/// * `df` - 分割対象のDataFrame
/// * `test_fraction` - テストセットの割合（0より大きく1未満）
/// * `seed` - 乱数シード（再現性のため。Noneの場合はエントロピーから生成）
///
/// # Returns
/// * `Result<(DataFrame, DataFrame)>` - (訓練セット, テストセット)
pub fn train_test_split(
    df: &DataFrame,
    test_fraction: f64,
    seed: Option<u64>,
) -> Result<(DataFrame, DataFrame)> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(Error::InvalidValue(format!(
            "テストセットの割合は0より大きく1未満である必要があります: {}",
            test_fraction
        )));
    }

    let n_rows = df.row_count();
    if n_rows < 2 {
        return Err(Error::InsufficientData(format!(
            "分割には少なくとも2行が必要です: {}行",
            n_rows
        )));
    }

    // シード付きの乱数生成器を使用（再現性のため）
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    // インデックスをシャッフルして分割
    let mut indices: Vec<usize> = (0..n_rows).collect();
    indices.shuffle(&mut rng);

    let test_size = ((n_rows as f64 * test_fraction).ceil() as usize).min(n_rows - 1);

    let test_indices = &indices[0..test_size];
    let train_indices = &indices[test_size..];

    let test_df = df.take(test_indices)?;
    let train_df = df.take(train_indices)?;

    Ok((train_df, test_df))
}
