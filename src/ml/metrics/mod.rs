//! 機械学習の評価指標モジュール
//!
//! 回帰モデルの評価に使用する指標を提供します。

pub mod regression;
