//! 前処理モジュール
//!
//! 機械学習のための特徴量スケーリング機能を提供します。

use std::collections::HashMap;

use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::stats;

/// データ変換器のトレイト
pub trait Transformer {
    /// データから学習する
    fn fit(&mut self, df: &DataFrame) -> Result<()>;

    /// データを変換する
    fn transform(&self, df: &DataFrame) -> Result<DataFrame>;

    /// データを学習し、その後変換する
    fn fit_transform(&mut self, df: &DataFrame) -> Result<DataFrame> {
        self.fit(df)?;
        self.transform(df)
    }
}

/// 数値データを標準化するための変換器
pub struct StandardScaler {
    /// 各列の平均値
    means: HashMap<String, f64>,
    /// 各列の標準偏差
    stds: HashMap<String, f64>,
    /// 変換対象の列
    columns: Vec<String>,
}

impl StandardScaler {
    /// 新しいStandardScalerを作成
    pub fn new(columns: Vec<String>) -> Self {
        StandardScaler {
            means: HashMap::new(),
            stds: HashMap::new(),
            columns,
        }
    }
}

impl Transformer for StandardScaler {
    fn fit(&mut self, df: &DataFrame) -> Result<()> {
        for col_name in &self.columns {
            let values = df
                .column(col_name)
                .ok_or_else(|| Error::ColumnNotFound(col_name.clone()))?;

            let mean = stats::mean(values)?;
            let std = stats::std(values)?;
            self.means.insert(col_name.clone(), mean);
            self.stds.insert(col_name.clone(), std);
        }
        Ok(())
    }

    fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut result = df.clone();

        for col_name in &self.columns {
            if let (Some(&mean), Some(&std)) = (self.means.get(col_name), self.stds.get(col_name))
            {
                let values = df
                    .column(col_name)
                    .ok_or_else(|| Error::ColumnNotFound(col_name.clone()))?;

                let scaled: Vec<f64> = values
                    .iter()
                    .map(|&v| {
                        if std > 0.0 {
                            (v - mean) / std
                        } else {
                            // 定数列は0にマップする
                            0.0
                        }
                    })
                    .collect();

                result.replace_column(col_name, scaled)?;
            }
        }

        Ok(result)
    }
}

/// 数値データを[0,1]の範囲に正規化するための変換器
pub struct MinMaxScaler {
    /// 各列の最小値
    mins: HashMap<String, f64>,
    /// 各列の最大値
    maxs: HashMap<String, f64>,
    /// 変換対象の列
    columns: Vec<String>,
}

impl MinMaxScaler {
    /// 新しいMinMaxScalerを作成
    pub fn new(columns: Vec<String>) -> Self {
        MinMaxScaler {
            mins: HashMap::new(),
            maxs: HashMap::new(),
            columns,
        }
    }
}

impl Transformer for MinMaxScaler {
    fn fit(&mut self, df: &DataFrame) -> Result<()> {
        for col_name in &self.columns {
            let values = df
                .column(col_name)
                .ok_or_else(|| Error::ColumnNotFound(col_name.clone()))?;

            if values.is_empty() {
                return Err(Error::EmptyInput(format!(
                    "列 '{}' が空のためスケーリングできません (長さ 0)",
                    col_name
                )));
            }

            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            self.mins.insert(col_name.clone(), min);
            self.maxs.insert(col_name.clone(), max);
        }
        Ok(())
    }

    fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut result = df.clone();

        for col_name in &self.columns {
            if let (Some(&min), Some(&max)) = (self.mins.get(col_name), self.maxs.get(col_name)) {
                let range = max - min;

                let values = df
                    .column(col_name)
                    .ok_or_else(|| Error::ColumnNotFound(col_name.clone()))?;

                let scaled: Vec<f64> = values
                    .iter()
                    .map(|&v| {
                        if range > 0.0 {
                            (v - min) / range
                        } else {
                            // 定数列は中央の0.5にマップする
                            0.5
                        }
                    })
                    .collect();

                result.replace_column(col_name, scaled)?;
            }
        }

        Ok(result)
    }
}
