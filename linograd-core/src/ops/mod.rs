//! # Graph operations (`ops`)
//!
//! Every operation has an `xxx_op` function that computes the forward value
//! from its operands' values and appends the result to the [`Graph`] together
//! with the [`Op`] tag selecting its backward rule, and an `xxx_backward`
//! function holding that rule. No gradient work happens in the forward pass.
//!
//! - [`arithmetic`]: elementwise `add`, `sub`, `mul`, `div`, `pow`, `neg`, all
//!   broadcasting their operands.
//! - [`linalg`]: `matmul`.
//!
//! [`Graph`]: crate::autograd::Graph
//! [`Op`]: crate::autograd::Op

pub mod arithmetic;
pub mod linalg;
