//! 回帰評価指標のテスト

use regmetrs::error::Error;
use regmetrs::ml::metrics::regression::{
    mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error,
};

const EPS: f64 = 1e-10;

#[test]
fn test_perfect_prediction() {
    // 完全一致の場合、誤差はすべて0、決定係数は1
    let y_true = vec![1.0, 2.0, 3.0];
    let y_pred = vec![1.0, 2.0, 3.0];

    assert_eq!(mean_squared_error(&y_true, &y_pred).unwrap(), 0.0);
    assert_eq!(root_mean_squared_error(&y_true, &y_pred).unwrap(), 0.0);
    assert_eq!(mean_absolute_error(&y_true, &y_pred).unwrap(), 0.0);
    assert_eq!(r2_score(&y_true, &y_pred).unwrap(), 1.0);
}

#[test]
fn test_constant_prediction() {
    // y = [1,2,3], 予測はすべて平均値の2
    let y_true = vec![1.0, 2.0, 3.0];
    let y_pred = vec![2.0, 2.0, 2.0];

    let mse = mean_squared_error(&y_true, &y_pred).unwrap();
    assert!((mse - 2.0 / 3.0).abs() < EPS);

    let rmse = root_mean_squared_error(&y_true, &y_pred).unwrap();
    assert!((rmse - (2.0f64 / 3.0).sqrt()).abs() < EPS);
    assert!((rmse - 0.8165).abs() < 1e-4);

    let mae = mean_absolute_error(&y_true, &y_pred).unwrap();
    assert!((mae - 2.0 / 3.0).abs() < EPS);

    // 平均値による定数予測のR^2は0
    let r2 = r2_score(&y_true, &y_pred).unwrap();
    assert!(r2.abs() < EPS);
}

#[test]
fn test_rmse_is_sqrt_of_mse() {
    let y_true = vec![3.0, -0.5, 2.0, 7.0];
    let y_pred = vec![2.5, 0.0, 2.0, 8.0];

    let mse = mean_squared_error(&y_true, &y_pred).unwrap();
    let rmse = root_mean_squared_error(&y_true, &y_pred).unwrap();

    assert!((rmse - mse.sqrt()).abs() < EPS);
    assert!(rmse >= 0.0);
}

#[test]
fn test_symmetry() {
    // MSEとMAEは引数の順序を入れ替えても同じ値になる
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![0.5, 2.5, 2.0, 5.0];

    let mse_ab = mean_squared_error(&a, &b).unwrap();
    let mse_ba = mean_squared_error(&b, &a).unwrap();
    assert!((mse_ab - mse_ba).abs() < EPS);

    let mae_ab = mean_absolute_error(&a, &b).unwrap();
    let mae_ba = mean_absolute_error(&b, &a).unwrap();
    assert!((mae_ab - mae_ba).abs() < EPS);
}

#[test]
fn test_non_negativity() {
    let y_true = vec![-3.0, 0.0, 4.5, -1.2];
    let y_pred = vec![2.0, -5.0, 4.5, 0.0];

    assert!(mean_squared_error(&y_true, &y_pred).unwrap() >= 0.0);
    assert!(mean_absolute_error(&y_true, &y_pred).unwrap() >= 0.0);
}

#[test]
fn test_negative_r2() {
    // 平均値予測より悪いモデルのR^2は負になる
    let y_true = vec![1.0, 2.0, 3.0];
    let y_pred = vec![3.0, 3.0, -3.0];

    let r2 = r2_score(&y_true, &y_pred).unwrap();
    assert!(r2 < 0.0);
}

#[test]
fn test_dimension_mismatch() {
    // 長さ3と長さ4の組み合わせはすべての指標でエラーになる
    let y_true = vec![1.0, 2.0, 3.0];
    let y_pred = vec![1.0, 2.0, 3.0, 4.0];

    let err = mean_squared_error(&y_true, &y_pred).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch(_)));
    // エラーメッセージには両方の長さが含まれる
    let msg = err.to_string();
    assert!(msg.contains('3') && msg.contains('4'));

    assert!(matches!(
        root_mean_squared_error(&y_true, &y_pred).unwrap_err(),
        Error::DimensionMismatch(_)
    ));
    assert!(matches!(
        mean_absolute_error(&y_true, &y_pred).unwrap_err(),
        Error::DimensionMismatch(_)
    ));
    assert!(matches!(
        r2_score(&y_true, &y_pred).unwrap_err(),
        Error::DimensionMismatch(_)
    ));
}

#[test]
fn test_empty_input() {
    // 空ベクトルはすべての指標でエラーになる
    let empty: Vec<f64> = vec![];

    assert!(matches!(
        mean_squared_error(&empty, &empty).unwrap_err(),
        Error::EmptyInput(_)
    ));
    assert!(matches!(
        root_mean_squared_error(&empty, &empty).unwrap_err(),
        Error::EmptyInput(_)
    ));
    assert!(matches!(
        mean_absolute_error(&empty, &empty).unwrap_err(),
        Error::EmptyInput(_)
    ));
    assert!(matches!(
        r2_score(&empty, &empty).unwrap_err(),
        Error::EmptyInput(_)
    ));
}

#[test]
fn test_degenerate_variance() {
    // 真の値がすべて同じ場合、どんな予測でもR^2は計算できない
    let y_true = vec![5.0, 5.0, 5.0];

    let err = r2_score(&y_true, &[4.0, 5.0, 6.0]).unwrap_err();
    assert!(matches!(err, Error::DegenerateVariance(_)));

    // 予測が完全に一致していても同様
    let err = r2_score(&y_true, &[5.0, 5.0, 5.0]).unwrap_err();
    assert!(matches!(err, Error::DegenerateVariance(_)));

    // MSEとMAEは定数ベクトルでも計算できる
    assert_eq!(mean_squared_error(&y_true, &[5.0, 5.0, 5.0]).unwrap(), 0.0);
    assert_eq!(mean_absolute_error(&y_true, &[5.0, 5.0, 5.0]).unwrap(), 0.0);
}

#[test]
fn test_single_element() {
    // 長さ1のベクトルでもMSE/MAEは計算できる
    let y_true = vec![2.0];
    let y_pred = vec![3.5];

    assert!((mean_squared_error(&y_true, &y_pred).unwrap() - 2.25).abs() < EPS);
    assert!((mean_absolute_error(&y_true, &y_pred).unwrap() - 1.5).abs() < EPS);

    // 長さ1は分散が必ず0なのでR^2は計算できない
    assert!(matches!(
        r2_score(&y_true, &y_pred).unwrap_err(),
        Error::DegenerateVariance(_)
    ));
}

#[test]
fn test_nan_propagates() {
    // 非有限値は検査せず、そのまま結果に伝播する
    let y_true = vec![1.0, f64::NAN, 3.0];
    let y_pred = vec![1.0, 2.0, 3.0];

    assert!(mean_squared_error(&y_true, &y_pred).unwrap().is_nan());
    assert!(mean_absolute_error(&y_true, &y_pred).unwrap().is_nan());
}
