//! Integration tests for the sorting algorithms.

#![cfg(feature = "sorting")]

use ordkit::sorting::{merge_sort, merge_sort_by, quick_sort, quick_sort_by, quick_sorted};
use rstest::rstest;

#[rstest]
fn test_merge_sort_empty() {
    assert_eq!(merge_sort::<i32>(&[]), Vec::<i32>::new());
}

#[rstest]
fn test_merge_sort_single() {
    assert_eq!(merge_sort(&[5]), vec![5]);
}

#[rstest]
fn test_merge_sort_mixed() {
    assert_eq!(
        merge_sort(&[0, 43, 2, 5, 2, 4, 7, 4, 9, -10]),
        vec![-10, 0, 2, 2, 4, 4, 5, 7, 9, 43]
    );
}

#[rstest]
fn test_quick_sorted_mixed() {
    assert_eq!(
        quick_sorted(&[0, 1, 5, -20, 3, 66, 2, 9, 7, 22, 11, -33, 100]),
        vec![-33, -20, 0, 1, 2, 3, 5, 7, 9, 11, 22, 66, 100]
    );
}

#[rstest]
#[case::empty(vec![])]
#[case::single(vec!["only".to_string()])]
#[case::words(vec!["pear".to_string(), "apple".to_string(), "fig".to_string(), "apple".to_string()])]
fn test_both_sorts_agree_with_std(#[case] input: Vec<String>) {
    let mut expected = input.clone();
    expected.sort();

    let mut quick = input.clone();
    quick_sort(&mut quick);

    assert_eq!(merge_sort(&input), expected);
    assert_eq!(quick, expected);
}

#[rstest]
fn test_merge_sort_by_key_is_stable() {
    let people = [("ann", 31), ("bob", 25), ("cid", 31), ("dee", 25), ("eve", 40)];
    let by_age = merge_sort_by(&people, |left, right| left.1.cmp(&right.1));
    let names: Vec<&str> = by_age.iter().map(|(name, _)| *name).collect();

    assert_eq!(names, vec!["bob", "dee", "ann", "cid", "eve"]);
}

#[rstest]
fn test_quick_sort_by_reverse() {
    let mut numbers = vec![4, 8, 1, 9];
    quick_sort_by(&mut numbers, |left, right| right.cmp(left));
    assert_eq!(numbers, vec![9, 8, 4, 1]);
}

#[rstest]
fn test_quick_sort_floats_with_total_cmp() {
    let mut numbers = vec![2.5_f64, -1.0, 0.0, 10.25];
    quick_sort_by(&mut numbers, f64::total_cmp);
    assert_eq!(numbers, vec![-1.0, 0.0, 2.5, 10.25]);
}

#[rstest]
fn test_sorted_and_reverse_inputs() {
    let ascending: Vec<i32> = (0..1_000).collect();
    let descending: Vec<i32> = (0..1_000).rev().collect();

    assert_eq!(merge_sort(&descending), ascending);
    assert_eq!(quick_sorted(&descending), ascending);
    assert_eq!(quick_sorted(&ascending), ascending);
}
