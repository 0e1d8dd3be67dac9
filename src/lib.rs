mod error;
mod mutation;
mod transform;

pub mod handlers;
pub mod service;
pub mod store;

pub use error::ServiceError;
pub use mutation::{Mutation, Outcome, Precondition};
pub use transform::{
    build_decrement, build_increment, render_response, Operation, OperationResponse,
};
