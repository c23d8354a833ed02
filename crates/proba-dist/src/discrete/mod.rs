//! Discrete mass functions built on the exact `choose` primitive.

pub mod binomial;
pub mod geometric;
pub mod hypergeometric;
pub mod negative_binomial;
pub mod poisson;
