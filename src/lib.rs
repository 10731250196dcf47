//! Rust client for the [Secupay](https://secupay.com) payment web service APIs.
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Create an application user in the Secupay back office and write down its user id and its
//! authentication key. The key is used to sign every request and never leaves your application.
//!
//! ## Initialize a new `SecupayClient`
//!
//! Create a new [`SecupayClient`](crate::client::SecupayClient) with your user id and
//! authentication key.
//!
//! ```rust,no_run
//! # use secupay_rust::{SecupayClient, Error};
//! # use std::time::Duration;
//! # fn main() -> Result<(), Error> {
//! let client = SecupayClient::builder(512, "c2VjcmV0LWtleQ==")
//!     .with_timeout(Duration::from_secs(10))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! The client can also be configured from a file and `SECUPAY_*` environment variables, see
//! [`ClientConfig`](crate::config::ClientConfig).
//!
//! ## Create a transaction
//!
//! ```rust,no_run
//! # use secupay_rust::{SecupayClient, Error, apis::transactions::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: SecupayClient = unreachable!();
//! # let space_id = 405;
//! #
//! let transactions = TransactionsApi::new(client);
//!
//! let transaction_create = TransactionCreateBuilder::default()
//!     .currency("CHF")
//!     .line_items(vec![LineItemCreateBuilder::default()
//!         .name("Red T-Shirt")
//!         .unique_id("5412")
//!         .item_type(LineItemType::Product)
//!         .quantity(1.0)
//!         .amount_including_tax(29.95)
//!         .build()
//!         .unwrap()])
//!     .build()
//!     .unwrap();
//! let transaction = transactions.create(space_id, &transaction_create).await?;
//!
//! let url = transactions
//!     .build_payment_page_url(space_id, transaction.id)
//!     .await?;
//! println!("Pay transaction {} at {}", transaction.id, url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Handle version conflicts
//!
//! Updates of versioned entities fail with [`Error::VersioningError`] when the entity was
//! modified in the meantime:
//!
//! ```rust,no_run
//! # use secupay_rust::{Error, apis::transactions::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let transactions: TransactionsApi = unreachable!();
//! # let (space_id, id) = (405, 1);
//! let transaction = transactions.read(space_id, id).await?;
//! let pending = TransactionPending {
//!     id,
//!     version: transaction.version,
//!     merchant_reference: Some("order-42".to_string()),
//! };
//!
//! match transactions.confirm(space_id, &pending).await {
//!     Ok(confirmed) => println!("Confirmed: {}", confirmed.state),
//!     Err(Error::VersioningError(e)) => println!("Retry later: {}", e),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Call an operation without a typed client
//!
//! ```rust,no_run
//! # use secupay_rust::{SecupayClient, Error, apis::shopify_subscription_suspension::OPERATIONS};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: SecupayClient = unreachable!();
//! let count = OPERATIONS.iter().find(|o| o.name == "count").unwrap();
//! let res = client
//!     .call_api(count.request()?.query("spaceId", &405)?)
//!     .await?;
//!
//! println!("HTTP {}: {} suspensions", res.status, res.into_data::<u64>()?);
//! # Ok(())
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod authenticator;
pub mod client;
mod common;
pub mod config;
pub mod error;
mod middlewares;
pub mod model;
pub mod request;
pub mod response;
pub mod serializer;
pub mod transport;

#[cfg(test)]
mod test_utils;

pub use client::SecupayClient;
pub use error::Error;
