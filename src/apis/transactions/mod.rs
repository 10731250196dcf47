//! APIs and models related to transactions.

mod api;
mod model;

pub use api::{TransactionsApi, OPERATIONS};
pub use model::*;
