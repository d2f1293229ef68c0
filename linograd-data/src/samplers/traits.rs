use std::fmt::Debug;

/// Decides the order in which the indices of a dataset are visited.
pub trait Sampler: Debug {
    /// Returns the indices to visit for one pass over a dataset of
    /// `dataset_len` items. Random samplers advance their state on each call.
    fn iter(&mut self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Number of indices [`Sampler::iter`] yields for `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;

    /// Collects one pass into a vector.
    fn indices(&mut self, dataset_len: usize) -> Vec<usize> {
        self.iter(dataset_len).collect()
    }
}
