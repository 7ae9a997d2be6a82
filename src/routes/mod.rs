//! Route handlers

pub mod pricing;
