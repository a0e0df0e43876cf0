//! 機械学習機能を提供するモジュール
//!
//! このモジュールは、数値DataFrameを機械学習アルゴリズムで使用するための
//! モデル、前処理変換器、評価指標を提供します。

pub mod metrics;
pub mod model_selection;
pub mod models;
pub mod preprocessing;
