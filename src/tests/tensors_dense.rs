// src/tests/tensors_dense.rs

use crate::math::tensor::dense::Tensor;

#[test]
fn row_major_index_and_access() {
    let mut a: Tensor<f64> = Tensor::new(vec![2, 3, 4]);
    assert_eq!(a.len(), 24);
    assert_eq!(a.rank(), 3);

    // last axis fastest
    assert_eq!(a.index(&[0, 0, 1]), 1);
    assert_eq!(a.index(&[0, 1, 0]), 4);
    assert_eq!(a.index(&[1, 0, 0]), 12);
    assert_eq!(a.index(&[1, 2, 3]), 23);

    a.set(&[1, 2, 3], 6.5);
    assert_eq!(a.get(&[1, 2, 3]), 6.5);
    assert_eq!(a.data[23], 6.5);

    *a.get_mut(&[0, 1, 2]) += 1.25;
    assert_eq!(a.data[6], 1.25);
}

#[test]
fn parallel_fill_and_map() {
    let mut a: Tensor<f32> = Tensor::new(vec![8, 8]);
    a.par_fill(2.0);
    assert!(a.data.iter().all(|&x| x == 2.0));

    a.par_map_in_place(|x| 3.0 * x - 1.0);
    assert!(a.data.iter().all(|&x| x == 5.0));
}

#[test]
fn from_vec_keeps_layout() {
    let a = Tensor::from_vec(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(a.get(&[1, 0]), 3.0);
    assert_eq!(a.shape(), &[2, 2]);
}

#[test]
#[should_panic]
fn from_vec_rejects_wrong_length() {
    let _ = Tensor::<f64>::from_vec(vec![2, 3], vec![0.0; 5]);
}

#[test]
#[should_panic]
fn out_of_range_index_panics() {
    let a: Tensor<f64> = Tensor::new(vec![2, 3]);
    let _ = a.get(&[0, 3]);
}

#[test]
#[should_panic]
fn zero_dimension_rejected() {
    let _ = Tensor::<f64>::new(vec![4, 0]);
}

#[test]
#[should_panic]
fn from_vec_rejects_rank_zero() {
    let _ = Tensor::<f64>::from_vec(vec![], vec![1.0]);
}
