//! 機械学習モデルモジュール
//!
//! 教師あり学習モデルの実装とモデル評価のためのユーティリティを提供します。

use rayon::prelude::*;

use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// 教師あり学習モデルに共通するトレイト
pub trait SupervisedModel {
    /// モデルを訓練データでフィットさせる
    fn fit(&mut self, df: &DataFrame, target: &str, features: &[&str]) -> Result<()>;

    /// 新しいデータに対して予測を行う
    fn predict(&self, df: &DataFrame) -> Result<Vec<f64>>;

    /// モデルのスコアを計算（デフォルトはR^2）
    fn score(&self, df: &DataFrame, target: &str) -> Result<f64> {
        let y_true = df
            .column(target)
            .ok_or_else(|| Error::ColumnNotFound(target.to_string()))?;

        let y_pred = self.predict(df)?;

        // デフォルトでR^2スコアを使用
        crate::ml::metrics::regression::r2_score(y_true, &y_pred)
    }
}

/// k近傍法による回帰モデル
///
/// 予測値は、ユークリッド距離で最も近いk個の訓練データの
/// ラベルの平均値です。距離が同点の場合は訓練データの順序で選択されます。
pub struct KNeighborsRegressor {
    /// 近傍数
    k: usize,
    /// 訓練データの特徴量行列
    train_features: Vec<Vec<f64>>,
    /// 訓練データのラベル
    train_labels: Vec<f64>,
    /// 特徴量の名前
    feature_names: Vec<String>,
    /// 学習済みかどうか
    fitted: bool,
}

impl KNeighborsRegressor {
    /// 新しいk近傍法回帰モデルを作成
    pub fn new(k: usize) -> Self {
        KNeighborsRegressor {
            k,
            train_features: Vec::new(),
            train_labels: Vec::new(),
            feature_names: Vec::new(),
            fitted: false,
        }
    }

    /// 近傍数を取得
    pub fn k(&self) -> usize {
        self.k
    }

    /// 学習済みかどうか
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// ユークリッド距離の二乗を計算
    fn squared_euclidean_distance(x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| (xi - yi).powi(2))
            .sum()
    }

    /// 1つのデータポイントに対して予測を行う
    fn predict_one(&self, point: &[f64]) -> f64 {
        // 全訓練データとの距離を計算
        let mut distances: Vec<(f64, f64)> = self
            .train_features
            .iter()
            .zip(self.train_labels.iter())
            .map(|(train_point, &label)| {
                (Self::squared_euclidean_distance(point, train_point), label)
            })
            .collect();

        // 距離の昇順にソート（sort_byは安定ソートのため、同点は訓練データの順序を保つ）
        distances.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        // k個の近傍のラベル平均
        let sum: f64 = distances.iter().take(self.k).map(|&(_, label)| label).sum();
        sum / self.k as f64
    }
}

impl SupervisedModel for KNeighborsRegressor {
    fn fit(&mut self, df: &DataFrame, target: &str, features: &[&str]) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidValue(
                "近傍数kは1以上である必要があります".to_string(),
            ));
        }

        if features.is_empty() {
            return Err(Error::InvalidValue(
                "少なくとも1つの特徴量が必要です".to_string(),
            ));
        }

        let labels = df
            .column(target)
            .ok_or_else(|| Error::ColumnNotFound(target.to_string()))?
            .to_vec();

        let matrix = df.feature_matrix(features)?;

        if matrix.len() < self.k {
            return Err(Error::InsufficientData(format!(
                "近傍数k={}に対して訓練データが不足しています: {}行",
                self.k,
                matrix.len()
            )));
        }

        log::debug!(
            "KNeighborsRegressor: k={}, 訓練データ {}行 x 特徴量{}個",
            self.k,
            matrix.len(),
            features.len()
        );

        self.train_features = matrix;
        self.train_labels = labels;
        self.feature_names = features.iter().map(|s| s.to_string()).collect();
        self.fitted = true;

        Ok(())
    }

    fn predict(&self, df: &DataFrame) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(Error::InvalidOperation(
                "モデルがまだ学習されていません".to_string(),
            ));
        }

        let names: Vec<&str> = self.feature_names.iter().map(|s| s.as_str()).collect();
        let matrix = df.feature_matrix(&names)?;

        // 各データポイントの予測は独立なので並列に評価する
        let predictions: Vec<f64> = matrix.par_iter().map(|row| self.predict_one(row)).collect();

        Ok(predictions)
    }
}
