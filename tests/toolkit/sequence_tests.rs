use rhizome::sequence::{filter, map_in_place};

fn square(x: f64) -> f64 {
    x * x
}

fn is_even(x: &f64) -> bool {
    (*x as i64) % 2 == 0
}

#[test]
fn squares_elements_in_place() {
    let mut arr = [1.0, 2.0, 3.0, 4.0];
    map_in_place(&mut arr, square);

    assert_eq!(arr, [1.0, 4.0, 9.0, 16.0]);
}

#[test]
fn squares_negative_elements() {
    let mut arr = [-1.0, -2.0, -3.0, -4.0];
    map_in_place(&mut arr, square);

    assert_eq!(arr, [1.0, 4.0, 9.0, 16.0]);
}

#[test]
fn map_visits_every_element_once() {
    let mut arr   = [1.0, 2.0, 3.0];
    let mut calls = 0usize;
    map_in_place(&mut arr, |v| { calls += 1; v + 1.0 });

    assert_eq!(calls, 3);
    assert_eq!(arr, [2.0, 3.0, 4.0]);
}

#[test]
fn map_on_empty_slice_is_a_no_op() {
    let mut arr: [f64; 0] = [];
    map_in_place(&mut arr, square);

    assert!(arr.is_empty());
}

#[test]
fn filter_keeps_even_values() {
    let arr  = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let kept = filter(&arr, is_even);

    assert_eq!(kept, vec![2.0, 4.0, 6.0]);
}

#[test]
fn filter_with_no_matches_yields_empty_vec() {
    let arr  = [1.0, 3.0, 5.0, 7.0];
    let kept = filter(&arr, is_even);

    assert!(kept.is_empty());
}

#[test]
fn filter_on_empty_input_yields_empty_vec() {
    let arr: [f64; 0] = [];
    let kept = filter(&arr, is_even);

    assert!(kept.is_empty());
}

#[test]
fn filter_preserves_relative_order() {
    let arr  = [6.0, 1.0, 2.0, 9.0, 4.0];
    let kept = filter(&arr, is_even);

    assert_eq!(kept, vec![6.0, 2.0, 4.0]);
}

#[test]
fn filter_clones_non_copy_elements() {
    let words = [String::from("fir"), String::from("oak"), String::from("alder")];
    let kept  = filter(&words, |w| w.len() == 3);

    assert_eq!(kept, vec!["fir".to_string(), "oak".to_string()]);
    // input is untouched
    assert_eq!(words.len(), 3);
}
