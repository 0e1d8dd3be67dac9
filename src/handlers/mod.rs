//! Operation handlers.
//!
//! Each handler module exports `OPERATION` (the route name) and
//! `handle(ctx)`. Both follow the same shape: require a pre-validated
//! caller, build a mutation descriptor in the transform layer, apply it
//! through the store adapter, render the outcome.

pub mod add_stock;
pub mod remove_stock;
