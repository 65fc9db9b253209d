use attrclust_core::{ClusterError, Vector};
use proptest::prelude::*;

#[test]
fn empty_vector_is_additive_identity() {
    let v = Vector::new(vec![1.0, 2.0, 3.0]);
    let empty = Vector::default();
    assert_eq!(empty.add(&v).unwrap().to_array(), vec![1.0, 2.0, 3.0]);
    assert_eq!(v.add(&empty).unwrap().to_array(), vec![1.0, 2.0, 3.0]);
    assert!(empty.add(&empty).unwrap().is_empty());
}

#[test]
fn add_and_avg_produce_mean() {
    let a = Vector::new(vec![1.0, 0.0, 1.0]);
    let b = Vector::new(vec![0.0, 0.0, 1.0]);
    let total = Vector::default().add(&a).unwrap().add(&b).unwrap();
    assert_eq!(total.to_array(), vec![1.0, 0.0, 2.0]);
    assert_eq!(total.avg(2).to_array(), vec![0.5, 0.0, 1.0]);
}

#[test]
fn avg_by_zero_is_identity() {
    let v = Vector::new(vec![4.0, 2.0]);
    assert!(v.avg(0).equal(&v));
}

#[test]
fn mismatched_lengths_fail_fast() {
    let a = Vector::new(vec![1.0, 2.0]);
    let b = Vector::new(vec![1.0, 2.0, 3.0]);
    let err = a.add(&b).unwrap_err();
    match err {
        ClusterError::Vector(info) => {
            assert_eq!(info.code, "dimension-mismatch");
            assert_eq!(info.context.get("left"), Some(&"2".to_string()));
            assert_eq!(info.context.get("right"), Some(&"3".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn equality_is_exact() {
    let a = Vector::new(vec![0.1 + 0.2]);
    let b = Vector::new(vec![0.3]);
    assert!(!a.equal(&b));
    assert!(a.equal(&a.clone()));
    assert!(!Vector::new(vec![0.0]).equal(&Vector::default()));
}

#[test]
fn clear_resets_to_identity() {
    let mut v = Vector::new(vec![1.0, 1.0]);
    v.clear();
    assert!(v.is_empty());
    v.accumulate(&Vector::new(vec![2.0, 3.0])).unwrap();
    assert_eq!(v.as_slice(), &[2.0, 3.0]);
}

proptest! {
    #[test]
    fn accumulate_matches_componentwise_sum(values in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 1..16)) {
        let left: Vec<f64> = values.iter().map(|(a, _)| *a).collect();
        let right: Vec<f64> = values.iter().map(|(_, b)| *b).collect();
        let sum = Vector::new(left.clone()).add(&Vector::new(right.clone())).unwrap();
        for (idx, value) in sum.as_slice().iter().enumerate() {
            prop_assert_eq!(*value, left[idx] + right[idx]);
        }
    }
}
