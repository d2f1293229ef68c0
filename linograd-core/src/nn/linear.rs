use crate::autograd::{Graph, NodeId};
use crate::error::LinogradError;
use crate::tensor::{rand_uniform, randn, Tensor};
use log::debug;
use rand::Rng;

/// How [`Linear::new`] draws the initial parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Initializer {
    /// Uniform in `[0, scale)`.
    #[default]
    Uniform,
    /// Normal with mean 0 and standard deviation `scale`.
    Normal,
}

impl Initializer {
    pub fn sample<R: Rng + ?Sized>(
        self,
        shape: &[usize],
        scale: f64,
        rng: &mut R,
    ) -> Result<Tensor, LinogradError> {
        match self {
            Initializer::Uniform => rand_uniform(shape, 0.0, scale, rng),
            Initializer::Normal => randn(shape, scale, rng),
        }
    }
}

/// Linear predictor `y = x . w + b` whose parameters are leaves of a graph.
///
/// With a rank-2 weight of shape `(in_features, 1)` the input is multiplied
/// with `matmul`; with a rank-0 weight the model is the scalar `w * x + b`.
/// The handles stay valid as long as the owning graph is never rewound below
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linear {
    weight: NodeId,
    bias: NodeId,
    in_features: usize,
}

impl Linear {
    /// Registers a weight of shape `(in_features, 1)` and a bias of shape
    /// `(1,)`, both drawn by `initializer` with the given scale.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        in_features: usize,
        initializer: Initializer,
        init_scale: f64,
        rng: &mut R,
    ) -> Result<Self, LinogradError> {
        if in_features == 0 {
            return Err(LinogradError::InvalidConfig(
                "a linear model needs at least one input feature".to_string(),
            ));
        }
        let weight_value = initializer.sample(&[in_features, 1], init_scale, rng)?;
        let bias_value = initializer.sample(&[1], init_scale, rng)?;
        debug!(
            "Linear::new: in_features={}, weight={}, bias={}",
            in_features, weight_value, bias_value
        );
        let weight = graph.leaf(weight_value);
        let bias = graph.leaf(bias_value);
        Ok(Linear {
            weight,
            bias,
            in_features,
        })
    }

    /// Registers rank-0 weight and bias leaves with the given values.
    pub fn scalar(graph: &mut Graph, weight: f64, bias: f64) -> Self {
        Linear {
            weight: graph.scalar(weight),
            bias: graph.scalar(bias),
            in_features: 1,
        }
    }

    pub fn weight(&self) -> NodeId {
        self.weight
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// Weight first, then bias.
    pub fn parameters(&self) -> [NodeId; 2] {
        [self.weight, self.bias]
    }

    pub fn is_scalar(&self, graph: &Graph) -> Result<bool, LinogradError> {
        Ok(graph.value(self.weight)?.is_scalar())
    }

    /// Wraps one sample's features as the input leaf this model expects.
    pub fn input(&self, graph: &mut Graph, features: &[f64]) -> Result<NodeId, LinogradError> {
        if features.len() != self.in_features {
            return Err(LinogradError::ShapeMismatch {
                expected: vec![self.in_features],
                actual: vec![features.len()],
                operation: "Linear::input".to_string(),
            });
        }
        let value = if self.is_scalar(graph)? {
            Tensor::scalar(features[0])
        } else {
            Tensor::from_slice(features)
        };
        Ok(graph.leaf(value))
    }

    /// Builds the prediction node for `input`.
    pub fn forward(&self, graph: &mut Graph, input: NodeId) -> Result<NodeId, LinogradError> {
        let product = if self.is_scalar(graph)? {
            graph.mul(self.weight, input)?
        } else {
            graph.matmul(input, self.weight)?
        };
        graph.add(product, self.bias)
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
