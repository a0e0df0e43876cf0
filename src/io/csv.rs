//! CSV入出力モジュール

use csv::{ReaderBuilder, Writer};
use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};
use crate::DataFrame;

/// CSVファイルからDataFrameを読み込む
///
/// すべてのフィールドは数値（f64）として解釈されます。
/// 数値に変換できないフィールドがある場合はエラーになります。
pub fn read_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<DataFrame> {
    let file = File::open(path.as_ref())?;

    // CSVリーダーを設定
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .trim(csv::Trim::All)
        .from_reader(file);

    // ヘッダー行を取得
    let headers: Vec<String> = if has_header {
        rdr.headers()?.iter().map(|h| h.to_string()).collect()
    } else {
        // ヘッダーがない場合は、最初の行から推測して"column_0", "column_1"などとする
        let first_record = rdr.records().next();
        match first_record {
            Some(result) => {
                let record = result?;
                let names: Vec<String> = (0..record.len())
                    .map(|i| format!("column_{}", i))
                    .collect();

                // 最初の行もデータとして取り込む必要があるため、リーダーを作り直す
                let file = File::open(path.as_ref())?;
                rdr = ReaderBuilder::new()
                    .has_headers(false)
                    .trim(csv::Trim::All)
                    .from_reader(file);

                names
            }
            // ファイルが空の場合
            None => return Ok(DataFrame::new()),
        }
    };

    // データを列ごとに収集
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    // 各行を処理
    for (row_idx, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() != headers.len() {
            return Err(Error::InconsistentRowCount {
                expected: headers.len(),
                found: record.len(),
            });
        }

        for (i, field) in record.iter().enumerate() {
            let value: f64 = field.parse().map_err(|_| {
                Error::Cast(format!(
                    "列 '{}' の行 {} を数値に変換できません: '{}'",
                    headers[i], row_idx, field
                ))
            })?;
            columns[i].push(value);
        }
    }

    // 列をDataFrameに追加
    let mut df = DataFrame::new();
    for (header, values) in headers.into_iter().zip(columns.into_iter()) {
        df.add_column(header, values)?;
    }

    Ok(df)
}

/// DataFrameをCSVファイルに書き込む
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut wtr = Writer::from_writer(file);

    // ヘッダー行を書き込む
    wtr.write_record(df.column_names())?;

    // 各行のデータを書き込む
    let row_count = df.row_count();
    for i in 0..row_count {
        let mut row = Vec::with_capacity(df.column_count());

        for col_name in df.column_names() {
            if let Some(values) = df.column(col_name) {
                row.push(values[i].to_string());
            }
        }

        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
