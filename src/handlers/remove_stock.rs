//! `remove` — decrement an item's stock by one, never below zero.
//!
//! The decrement is guarded by a `Quantity > 0` precondition evaluated
//! atomically with the update; a request against an exhausted or absent
//! item yields an insufficient-stock client error and mutates nothing.

use crate::error::ServiceError;
use crate::service::Context;
use crate::store::{adapter, CounterStore};
use crate::transform::{self, Operation, OperationResponse};

pub const OPERATION: &str = "remove";

pub fn handle<S: CounterStore>(ctx: &Context<S>) -> Result<OperationResponse, ServiceError> {
    ctx.caller()?;
    let mutation = transform::build_decrement(ctx.raw_input())?;
    let outcome = adapter::apply(ctx.store(), &mutation);
    Ok(transform::render_response(Operation::Remove, &outcome))
}
