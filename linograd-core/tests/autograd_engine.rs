use approx::assert_relative_eq;
use linograd_core::autograd::grad_check::{check_grad, GradCheckError};
use linograd_core::autograd::topological_sort;
use linograd_core::optim::{Optimizer, Sgd};
use linograd_core::{Graph, LinogradError};

mod common;
use common::create_test_tensor;

#[test]
fn test_scalar_step_end_to_end() -> Result<(), LinogradError> {
    let mut graph = Graph::new();
    let w = graph.scalar(0.072);
    let b = graph.scalar(-0.061);
    let mark = graph.checkpoint();

    let x = graph.scalar(2.0);
    let y = graph.scalar(4.0);
    let wx = graph.mul(w, x)?;
    let y_hat = graph.add(wx, b)?;
    let diff = graph.sub(y, y_hat)?;
    let loss = graph.pow(diff, 2.0)?;
    graph.backward(loss)?;

    assert_relative_eq!(graph.value(y_hat)?.item()?, 0.083, epsilon = 1e-12);
    assert_relative_eq!(graph.value(loss)?.item()?, 15.342889, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(w)?.item()?, -15.668, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(b)?.item()?, -7.834, epsilon = 1e-9);

    let sgd = Sgd::new(1e-4)?;
    sgd.step(&mut graph, &[w, b])?;
    graph.rewind(mark);
    assert_eq!(graph.len(), 2);
    assert_relative_eq!(graph.value(w)?.item()?, 0.072 + 1.5668e-3, epsilon = 1e-12);
    assert_eq!(graph.grad(w)?.item()?, 0.0);
    Ok(())
}

#[test]
fn test_batched_linear_model_gradients() -> Result<(), GradCheckError> {
    let x = create_test_tensor(vec![0.2, 0.4, 1.0, 0.1, 0.9, 0.3, 0.5, 0.5, 0.0], vec![3, 3]);
    let w = create_test_tensor(vec![0.07, 0.02, 0.05], vec![3, 1]);
    let b = create_test_tensor(vec![0.03], vec![1]);
    let y = create_test_tensor(vec![0.4, 0.8, 0.6], vec![3, 1]);
    check_grad(
        |g, ids| {
            let xw = g.matmul(ids[0], ids[1])?;
            let y_hat = g.add(xw, ids[2])?;
            let diff = g.sub(ids[3], y_hat)?;
            let sq = g.pow(diff, 2.0)?;
            let n = g.scalar(3.0);
            g.div(sq, n)
        },
        &[x, w, b, y],
        1e-6,
        1e-4,
    )
}

#[test]
fn test_negation_and_division_chain() -> Result<(), GradCheckError> {
    let a = create_test_tensor(vec![1.5, -0.5, 2.0], vec![3]);
    let b = create_test_tensor(vec![0.75], vec![1]);
    check_grad(
        |g, ids| {
            let neg = g.neg(ids[0])?;
            let q = g.div(neg, ids[1])?;
            g.mul(q, ids[0])
        },
        &[a, b],
        1e-6,
        1e-4,
    )
}

#[test]
fn test_deep_chain_sorts_iteratively() -> Result<(), LinogradError> {
    let mut graph = Graph::new();
    let a = graph.scalar(1.0);
    let one = graph.scalar(1e-6);
    let mut current = a;
    for _ in 0..50_000 {
        current = graph.add(current, one)?;
    }
    let order = topological_sort(&graph, current)?;
    assert_eq!(order.len(), 50_002);
    graph.backward(current)?;
    assert_eq!(graph.grad(a)?.item()?, 1.0);
    assert_relative_eq!(graph.grad(one)?.item()?, 50_000.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_errors_surface_from_forward_ops() {
    let mut graph = Graph::new();
    let a = graph.leaf(create_test_tensor(vec![0.0; 6], vec![2, 3]));
    let b = graph.leaf(create_test_tensor(vec![0.0; 8], vec![2, 4]));
    let c = graph.leaf(create_test_tensor(vec![0.0; 8], vec![2, 2, 2]));

    assert!(matches!(
        graph.add(a, b),
        Err(LinogradError::BroadcastError { .. })
    ));
    assert!(matches!(
        graph.matmul(a, b),
        Err(LinogradError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        graph.matmul(c, a),
        Err(LinogradError::RankMismatch { actual: 3, .. })
    ));
    assert_eq!(graph.len(), 3);
}
