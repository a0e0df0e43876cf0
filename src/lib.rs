//! # RegMetRS
//!
//! 回帰モデル評価のための小さなツールキットです。
//! 数値DataFrame、CSV入出力、k近傍法回帰、前処理変換器、
//! および回帰評価指標（MSE / RMSE / MAE / R^2）を提供します。
//!
//! ## 例
//!
//! ```
//! use regmetrs::ml::metrics::regression::{mean_squared_error, r2_score};
//!
//! let y_true = vec![1.0, 2.0, 3.0];
//! let y_pred = vec![1.1, 1.9, 3.2];
//!
//! let mse = mean_squared_error(&y_true, &y_pred).unwrap();
//! let r2 = r2_score(&y_true, &y_pred).unwrap();
//! assert!(mse > 0.0 && r2 < 1.0);
//! ```

pub mod dataframe;
pub mod error;
pub mod io;
pub mod ml;
pub mod stats;

// Re-export commonly used types
pub use dataframe::DataFrame;
pub use error::{Error, Result};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
