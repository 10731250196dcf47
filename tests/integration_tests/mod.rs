mod helpers;
mod shopify_subscription_suspension;
mod transactions;
