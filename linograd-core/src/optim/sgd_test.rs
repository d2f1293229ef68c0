use super::*;
use crate::tensor::Tensor;
use approx::assert_relative_eq;

#[test]
fn test_sgd_rejects_bad_learning_rate() {
    for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(Sgd::new(lr), Err(LinogradError::InvalidConfig(_))),
            "learning rate {} accepted",
            lr
        );
    }
    assert_eq!(Sgd::new(0.01).unwrap().learning_rate(), 0.01);
}

#[test]
fn test_sgd_adjust_updates_and_clears() -> Result<(), LinogradError> {
    let mut graph = Graph::new();
    let w = graph.leaf(Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?);
    let x = graph.leaf(Tensor::new(vec![0.1, 0.2, 0.3, 0.4], vec![2, 2])?);
    let y = graph.mul(w, x)?;
    graph.backward(y)?;

    let sgd = Sgd::new(0.1)?;
    sgd.adjust(&mut graph, w)?;
    assert_relative_eq!(
        graph.value(w)?.data(),
        &[0.99, 1.98, 2.97, 3.96][..],
        epsilon = 1e-12
    );
    assert_eq!(graph.grad(w)?.data(), &[0.0; 4]);
    // Only the adjusted node is touched.
    assert_eq!(graph.grad(x)?.data(), &[1.0, 2.0, 3.0, 4.0]);
    Ok(())
}

#[test]
fn test_sgd_scalar_step() -> Result<(), LinogradError> {
    let mut graph = Graph::new();
    let w = graph.scalar(0.072);
    let b = graph.scalar(-0.061);
    let x = graph.scalar(2.0);
    let y = graph.scalar(4.0);
    let wx = graph.mul(w, x)?;
    let y_hat = graph.add(wx, b)?;
    let diff = graph.sub(y, y_hat)?;
    let loss = graph.pow(diff, 2.0)?;
    graph.backward(loss)?;

    let sgd = Sgd::new(0.01)?;
    sgd.step(&mut graph, &[w, b])?;
    assert_relative_eq!(graph.value(w)?.item()?, 0.072 + 0.15668, epsilon = 1e-12);
    assert_relative_eq!(graph.value(b)?.item()?, -0.061 + 0.07834, epsilon = 1e-12);
    assert_eq!(graph.grad(w)?.item()?, 0.0);
    assert_eq!(graph.grad(b)?.item()?, 0.0);
    Ok(())
}

#[test]
fn test_sgd_adjust_non_leaf_still_updates() -> Result<(), LinogradError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut graph = Graph::new();
    let a = graph.scalar(3.0);
    let b = graph.scalar(4.0);
    let c = graph.add(a, b)?;
    graph.backward(c)?;

    Sgd::new(0.5)?.adjust(&mut graph, c)?;
    assert_relative_eq!(graph.value(c)?.item()?, 6.5, epsilon = 1e-12);
    assert_eq!(graph.grad(c)?.item()?, 0.0);
    Ok(())
}

#[test]
fn test_sgd_adjust_invalid_node() {
    let mut graph = Graph::new();
    let mut other = Graph::new();
    let foreign = other.scalar(1.0);
    assert!(matches!(
        Sgd::new(0.1).unwrap().adjust(&mut graph, foreign),
        Err(LinogradError::InvalidNode { .. })
    ));
}
