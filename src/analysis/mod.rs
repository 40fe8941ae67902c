//! Decomposition result types

pub mod result;
