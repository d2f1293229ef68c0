/// One training example: a feature vector and its target value.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub target: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, target: f64) -> Self {
        Sample { features, target }
    }

    /// A sample with a single feature.
    pub fn scalar(feature: f64, target: f64) -> Self {
        Sample {
            features: vec![feature],
            target,
        }
    }

    pub fn num_features(&self) -> usize {
        self.features.len()
    }
}
