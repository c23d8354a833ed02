//! Core math modules.

pub mod choose;
pub mod quadrature;
pub mod stable;
