//! APIs and models related to the suspension of Shopify subscriptions.

mod api;
mod model;

pub use api::{ShopifySubscriptionSuspensionApi, OPERATIONS};
pub use model::*;
