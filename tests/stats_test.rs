//! 記述統計のテスト

use regmetrs::error::Error;
use regmetrs::stats;

const EPS: f64 = 1e-10;

#[test]
fn test_mean() {
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(stats::mean(&data).unwrap(), 3.0);

    let empty: Vec<f64> = vec![];
    assert!(matches!(
        stats::mean(&empty).unwrap_err(),
        Error::EmptyInput(_)
    ));
}

#[test]
fn test_variance_and_std() {
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];

    // 不偏分散: sum((x - 3)^2) / 4 = 10 / 4 = 2.5
    let var = stats::variance(&data).unwrap();
    assert!((var - 2.5).abs() < EPS);

    let std = stats::std(&data).unwrap();
    assert!((std - 2.5f64.sqrt()).abs() < EPS);

    // データが1つの場合は不偏分散が定義できない
    assert!(matches!(
        stats::variance(&[1.0]).unwrap_err(),
        Error::InsufficientData(_)
    ));
}

#[test]
fn test_describe() {
    let data = vec![5.0, 1.0, 3.0, 2.0, 4.0];
    let desc = stats::describe(&data).unwrap();

    assert_eq!(desc.count, 5);
    assert_eq!(desc.mean, 3.0);
    assert_eq!(desc.min, 1.0);
    assert_eq!(desc.max, 5.0);
    assert_eq!(desc.median, 3.0);
    assert_eq!(desc.q1, 2.0);
    assert_eq!(desc.q3, 4.0);
}

#[test]
fn test_describe_even_count() {
    let data = vec![1.0, 2.0, 3.0, 4.0];
    let desc = stats::describe(&data).unwrap();

    // 偶数個の場合、中央値は中央2値の平均
    assert_eq!(desc.median, 2.5);

    // 分位数は線形補間される
    assert!((desc.q1 - 1.75).abs() < EPS);
    assert!((desc.q3 - 3.25).abs() < EPS);
}

#[test]
fn test_describe_single_element() {
    let desc = stats::describe(&[42.0]).unwrap();

    assert_eq!(desc.count, 1);
    assert_eq!(desc.mean, 42.0);
    assert_eq!(desc.std, 0.0);
    assert_eq!(desc.min, 42.0);
    assert_eq!(desc.max, 42.0);
}

#[test]
fn test_describe_empty() {
    let empty: Vec<f64> = vec![];
    assert!(matches!(
        stats::describe(&empty).unwrap_err(),
        Error::EmptyInput(_)
    ));
}
