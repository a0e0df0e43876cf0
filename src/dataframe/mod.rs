//! 数値DataFrameモジュール
//!
//! 名前付きのf64列を保持する単純な列指向データ構造を提供します。
//! すべての列は同じ行数を持ちます。

use std::collections::HashMap;

use crate::error::{Error, Result};

/// DataFrame構造体: 名前付き数値列の集合
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    /// 列の追加順序
    column_order: Vec<String>,

    /// 列名から値ベクトルへのマップ
    columns: HashMap<String, Vec<f64>>,
}

impl DataFrame {
    /// 新しい空のDataFrameを作成
    pub fn new() -> Self {
        DataFrame {
            column_order: Vec::new(),
            columns: HashMap::new(),
        }
    }

    /// 列を追加
    ///
    /// 既存の列と行数が一致しない場合、または列名が重複している場合はエラーになります。
    pub fn add_column(&mut self, name: String, values: Vec<f64>) -> Result<()> {
        if self.columns.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name));
        }

        if !self.column_order.is_empty() {
            let expected = self.row_count();
            if values.len() != expected {
                return Err(Error::InconsistentRowCount {
                    expected,
                    found: values.len(),
                });
            }
        }

        self.column_order.push(name.clone());
        self.columns.insert(name, values);
        Ok(())
    }

    /// 既存の列を置き換える
    pub fn replace_column(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        if !self.columns.contains_key(name) {
            return Err(Error::ColumnNotFound(name.to_string()));
        }

        let expected = self.row_count();
        if values.len() != expected {
            return Err(Error::InconsistentRowCount {
                expected,
                found: values.len(),
            });
        }

        self.columns.insert(name.to_string(), values);
        Ok(())
    }

    /// 列名から値を取得
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// 列名の一覧を取得（追加順）
    pub fn column_names(&self) -> &[String] {
        &self.column_order
    }

    /// 行数を取得
    pub fn row_count(&self) -> usize {
        self.column_order
            .first()
            .and_then(|name| self.columns.get(name))
            .map(|v| v.len())
            .unwrap_or(0)
    }

    /// 列数を取得
    pub fn column_count(&self) -> usize {
        self.column_order.len()
    }

    /// DataFrameが空かどうか（行が存在しない場合にtrue）
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// 指定したインデックスの行を抽出して新しいDataFrameを作成
    ///
    /// インデックスの順序と重複はそのまま反映されます。
    pub fn take(&self, indices: &[usize]) -> Result<DataFrame> {
        let n_rows = self.row_count();
        for &idx in indices {
            if idx >= n_rows {
                return Err(Error::IndexOutOfBounds {
                    index: idx,
                    size: n_rows,
                });
            }
        }

        let mut result = DataFrame::new();
        for name in &self.column_order {
            let values = &self.columns[name];
            let taken: Vec<f64> = indices.iter().map(|&i| values[i]).collect();
            result.add_column(name.clone(), taken)?;
        }

        Ok(result)
    }

    /// 指定した列から行指向の特徴量行列を作成
    pub fn feature_matrix(&self, feature_names: &[&str]) -> Result<Vec<Vec<f64>>> {
        let mut feature_columns = Vec::with_capacity(feature_names.len());
        for &name in feature_names {
            let column = self
                .column(name)
                .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
            feature_columns.push(column);
        }

        let n_rows = self.row_count();
        let mut matrix = Vec::with_capacity(n_rows);
        for i in 0..n_rows {
            let row: Vec<f64> = feature_columns.iter().map(|col| col[i]).collect();
            matrix.push(row);
        }

        Ok(matrix)
    }
}
