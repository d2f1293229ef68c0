use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A sampler that randomly samples indices from a dataset.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    rng: StdRng,
}

impl RandomSampler {
    /// Creates a sampler seeded from the operating system.
    ///
    /// * `replacement`: if `true`, an index can be selected multiple times.
    /// * `num_samples`: indices drawn per pass; defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            rng: StdRng::from_entropy(),
        }
    }

    /// Like [`RandomSampler::new`], with a reproducible sequence of passes.
    pub fn seeded(replacement: bool, num_samples: Option<usize>, seed: u64) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&mut self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }
        let count = self.num_samples.unwrap_or(dataset_len);

        if self.replacement {
            let indices: Vec<usize> = (0..count)
                .map(|_| self.rng.gen_range(0..dataset_len))
                .collect();
            return Box::new(indices.into_iter());
        }
        if count > dataset_len {
            warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement; yielding nothing",
                count, dataset_len
            );
            return Box::new(std::iter::empty());
        }
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut self.rng);
        indices.truncate(count);
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        let count = self.num_samples.unwrap_or(dataset_len);
        if dataset_len == 0 || (!self.replacement && count > dataset_len) {
            return 0;
        }
        count
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
