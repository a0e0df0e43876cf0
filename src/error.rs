use thiserror::Error;

/// エラー型の定義
#[derive(Error, Debug)]
pub enum Error {
    #[error("入出力エラー")]
    Io(#[source] std::io::Error),

    #[error("CSVエラー")]
    Csv(#[source] csv::Error),

    #[error("列が見つかりません: {0}")]
    ColumnNotFound(String),

    #[error("列名が重複しています: {0}")]
    DuplicateColumnName(String),

    #[error("行数が一致しません: 期待値 {expected}, 実際 {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("インデックスが範囲外です: インデックス {index}, サイズ {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("型変換エラー: {0}")]
    Cast(String),

    #[error("次元不一致エラー: {0}")]
    DimensionMismatch(String),

    #[error("空入力エラー: {0}")]
    EmptyInput(String),

    #[error("分散縮退エラー: {0}")]
    DegenerateVariance(String),

    #[error("データ不足エラー: {0}")]
    InsufficientData(String),

    #[error("無効な値です: {0}")]
    InvalidValue(String),

    #[error("無効な操作です: {0}")]
    InvalidOperation(String),
}

/// Resultの型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

// 標準エラーからの変換
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
