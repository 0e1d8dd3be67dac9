//! `add` — increment an item's stock by one.
//!
//! Upsert semantics: an absent item is created at quantity 1. The response
//! echoes the post-mutation quantity as `currentStock`.

use crate::error::ServiceError;
use crate::service::Context;
use crate::store::{adapter, CounterStore};
use crate::transform::{self, Operation, OperationResponse};

pub const OPERATION: &str = "add";

pub fn handle<S: CounterStore>(ctx: &Context<S>) -> Result<OperationResponse, ServiceError> {
    ctx.caller()?;
    let mutation = transform::build_increment(ctx.raw_input())?;
    let outcome = adapter::apply(ctx.store(), &mutation);
    Ok(transform::render_response(Operation::Add, &outcome))
}
