//! Round trips and decompositions across the Bell engines

use crate::traits::{ROUND_TRIP_TOLERANCE, approx_eq, approx_eq_slice};
use crate::{Bell, PartialBell, PartialBellMemo, bell_numbers};

#[test]
fn test_bell_invert_compute_round_trip() {
    // x_bell = [0, a, b, c, d]
    let x = vec![0.0, 3.7, -1.2, 0.05, 8.4];
    let recovered = Bell.invert(&Bell.compute(&x).unwrap()).unwrap();
    assert!(approx_eq_slice(&recovered, &x, ROUND_TRIP_TOLERANCE));
}

#[test]
fn test_bell_compute_invert_round_trip() {
    let b = vec![1.0, 4.2, 9.9, 1.5, 7.3, 2.8];
    let again = Bell.compute(&Bell.invert(&b).unwrap()).unwrap();
    assert!(approx_eq_slice(&again, &b, ROUND_TRIP_TOLERANCE));
}

#[test]
fn test_negate_then_invert_gives_negated_variables() {
    let x = vec![0.0, 1.25, 6.0, -2.5, 3.0, 9.5];
    let negated = Bell.negate(&Bell.compute(&x).unwrap()).unwrap();
    let recovered = Bell.invert(&negated).unwrap();

    let expected: Vec<f64> = x.iter().map(|v| -v).collect();
    assert!(approx_eq_slice(&recovered, &expected, ROUND_TRIP_TOLERANCE));
}

#[test]
fn test_partial_bell_rows_sum_to_bell() {
    let x = vec![0.0, 2.2, 7.1, 4.4, 1.9, 5.5];
    let bell = Bell.compute(&x).unwrap();
    let table = PartialBell.compute(&x).unwrap();

    for n in 0..x.len() {
        let sum: f64 = (0..=n).map(|k| table[(n, k)]).sum();
        assert!(
            approx_eq(sum, bell[n], ROUND_TRIP_TOLERANCE),
            "n={n}: {sum} != {}",
            bell[n]
        );
    }
}

#[test]
fn test_partial_bell_first_column_round_trip() {
    let x = vec![0.0, 6.3, 2.1, 9.0, 4.8, 1.1];
    let table = PartialBell.compute(&x).unwrap();
    let recovered = PartialBell.invert(1, &table.column(1)).unwrap();
    assert!(approx_eq_slice(&recovered, &x, ROUND_TRIP_TOLERANCE));
}

#[test]
fn test_partial_bell_higher_column_round_trip() {
    // A longer sequence so that column k still recovers five variables
    let x = vec![0.0, 1.8, 3.3, 0.7, 2.6, 5.1, 1.4, 2.2];
    let table = PartialBell.compute(&x).unwrap();

    for k in 2..=3 {
        let recovered = PartialBell.invert(k, &table.column(k)).unwrap();
        let expected = &x[..x.len() - k + 1];
        assert!(
            approx_eq_slice(&recovered, expected, ROUND_TRIP_TOLERANCE),
            "k={k}: {recovered:?}"
        );
    }
}

#[test]
fn test_partial_bell_invert_memo_reuse() {
    let x = vec![0.0, 1.5, 0.5, 2.5, 3.5, 1.0];
    let table = PartialBell.compute(&x).unwrap();
    let column = table.column(2);

    let mut memo = PartialBellMemo::new();
    let first = PartialBell.invert_with_memo(2, &column, &mut memo).unwrap();
    let second = PartialBell.invert_with_memo(2, &column, &mut memo).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, PartialBell.invert(2, &column).unwrap());

    // The memo holds values of the recovered sequence, e.g. B_{3,1} = x3
    let b31 = memo.get(3, 1).unwrap();
    assert!(approx_eq(b31, x[3], ROUND_TRIP_TOLERANCE));
}

#[test]
fn test_bell_numbers_match_partial_rows() {
    let ones = [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
    let table = PartialBell.compute(&ones).unwrap();
    let numbers: Vec<f64> = bell_numbers(6).unwrap();
    assert_eq!(table.row_sums(), numbers);
}
