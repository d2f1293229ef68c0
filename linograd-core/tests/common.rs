use linograd_core::{Sample, Tensor};

// Each integration test binary uses a different subset of these helpers.
#[allow(dead_code)]
pub(crate) fn create_test_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

/// `target = input - 1` for inputs `0, step, 2 * step, ...`.
#[allow(dead_code)]
pub(crate) fn shifted_line(count: usize, step: f64) -> Vec<Sample> {
    (0..count)
        .map(|i| {
            let x = i as f64 * step;
            Sample::scalar(x, x - 1.0)
        })
        .collect()
}
