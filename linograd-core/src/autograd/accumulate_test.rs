use super::*;
use crate::tensor::Tensor;

#[test]
fn test_reduce_same_shape_is_identity() {
    let g = Tensor::from_slice(&[1.0, 2.0]);
    assert_eq!(reduce_to_shape(g.clone(), &[2]).unwrap(), g);
}

#[test]
fn test_reduce_leading_axes() {
    let g = Tensor::new((1..=6).map(|x| x as f64).collect(), vec![2, 3]).unwrap();
    let reduced = reduce_to_shape(g, &[3]).unwrap();
    assert_eq!(reduced.shape(), &[3]);
    assert_eq!(reduced.data(), &[5.0, 7.0, 9.0]);
}

#[test]
fn test_reduce_to_scalar() {
    let g = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let reduced = reduce_to_shape(g, &[]).unwrap();
    assert!(reduced.is_scalar());
    assert_eq!(reduced.item().unwrap(), 10.0);
}

#[test]
fn test_reduce_keepdim_axis() {
    let g = Tensor::new((1..=12).map(|x| x as f64).collect(), vec![3, 4]).unwrap();
    let reduced = reduce_to_shape(g, &[3, 1]).unwrap();
    assert_eq!(reduced.shape(), &[3, 1]);
    assert_eq!(reduced.data(), &[10.0, 26.0, 42.0]);
}

#[test]
fn test_reduce_scalar_to_unit_vector() {
    let reduced = reduce_to_shape(Tensor::scalar(4.0), &[1]).unwrap();
    assert_eq!(reduced.shape(), &[1]);
    assert_eq!(reduced.data(), &[4.0]);
}

#[test]
fn test_reduce_incompatible_shapes_fail() {
    let g = Tensor::new(vec![0.0; 12], vec![3, 4]).unwrap();
    assert_eq!(
        reduce_to_shape(g, &[4, 3]).unwrap_err(),
        LinogradError::ShapeReductionFailure {
            gradient: vec![3, 4],
            target: vec![4, 3],
        }
    );
}

#[test]
fn test_accumulate_sums_contributions() {
    let mut graph = Graph::new();
    let a = graph.leaf(Tensor::from_slice(&[1.0, 1.0]));
    accumulate_grad(&mut graph, a, Tensor::from_slice(&[0.5, 1.5])).unwrap();
    accumulate_grad(&mut graph, a, Tensor::new(vec![1.0, 1.0, 2.0, 2.0], vec![2, 2]).unwrap())
        .unwrap();
    assert_eq!(graph.grad(a).unwrap().data(), &[3.5, 4.5]);
}

#[test]
fn test_accumulate_failure_leaves_grad_untouched() {
    let mut graph = Graph::new();
    let a = graph.leaf(Tensor::new(vec![0.0; 12], vec![4, 3]).unwrap());
    let contribution = Tensor::new(vec![1.0; 12], vec![3, 4]).unwrap();
    assert!(matches!(
        accumulate_grad(&mut graph, a, contribution),
        Err(LinogradError::ShapeReductionFailure { .. })
    ));
    assert!(graph.grad(a).unwrap().data().iter().all(|&g| g == 0.0));
}
