use crate::{
    apis::{
        transactions::{Transaction, TransactionCreate, TransactionPending},
        Operation, JSON_UTF8, NO_CONTENT_TYPES,
    },
    model::{EntityQuery, EntityQueryFilter},
    serializer::ResponseType,
    Error, SecupayClient,
};
use reqwest::Method;

pub const CREATE: Operation = Operation {
    name: "create",
    path: "/transaction/create",
    method: Method::POST,
    accept: JSON_UTF8,
    content_type: JSON_UTF8,
    response_type: ResponseType::Model("Transaction"),
};

pub const READ: Operation = Operation {
    name: "read",
    path: "/transaction/read",
    method: Method::GET,
    accept: JSON_UTF8,
    content_type: NO_CONTENT_TYPES,
    response_type: ResponseType::Model("Transaction"),
};

pub const COUNT: Operation = Operation {
    name: "count",
    path: "/transaction/count",
    method: Method::POST,
    accept: JSON_UTF8,
    content_type: JSON_UTF8,
    response_type: ResponseType::Int,
};

pub const SEARCH: Operation = Operation {
    name: "search",
    path: "/transaction/search",
    method: Method::POST,
    accept: JSON_UTF8,
    content_type: JSON_UTF8,
    response_type: ResponseType::ModelArray("Transaction"),
};

pub const CONFIRM: Operation = Operation {
    name: "confirm",
    path: "/transaction/confirm",
    method: Method::POST,
    accept: JSON_UTF8,
    content_type: JSON_UTF8,
    response_type: ResponseType::Model("Transaction"),
};

pub const BUILD_PAYMENT_PAGE_URL: Operation = Operation {
    name: "buildPaymentPageUrl",
    path: "/transaction-payment-page/payment-page-url",
    method: Method::GET,
    accept: JSON_UTF8,
    content_type: NO_CONTENT_TYPES,
    response_type: ResponseType::Text,
};

/// Every transaction operation.
///
/// Paths carry no templated segments: ids and the space are sent as query parameters.
pub static OPERATIONS: &[Operation] = &[CREATE, READ, COUNT, SEARCH, CONFIRM, BUILD_PAYMENT_PAGE_URL];

/// Secupay transactions APIs client.
#[derive(Clone, Debug)]
pub struct TransactionsApi {
    client: SecupayClient,
}

impl TransactionsApi {
    pub fn new(client: SecupayClient) -> Self {
        Self { client }
    }

    /// Creates a new transaction in the `PENDING` state.
    #[tracing::instrument(
        name = "Create Transaction",
        skip(self, transaction),
        fields(currency = %transaction.currency)
    )]
    pub async fn create(
        &self,
        space_id: u64,
        transaction: &TransactionCreate,
    ) -> Result<Transaction, Error> {
        let call = CREATE
            .request()?
            .query("spaceId", &space_id)?
            .json_body(transaction)?;

        self.client.call_api(call).await?.into_data()
    }

    #[tracing::instrument(name = "Read Transaction", skip(self))]
    pub async fn read(&self, space_id: u64, id: u64) -> Result<Transaction, Error> {
        let call = READ
            .request()?
            .query("spaceId", &space_id)?
            .query("id", &id)?;

        self.client.call_api(call).await?.into_data()
    }

    #[tracing::instrument(name = "Count Transactions", skip(self, filter))]
    pub async fn count(
        &self,
        space_id: u64,
        filter: Option<&EntityQueryFilter>,
    ) -> Result<u64, Error> {
        let mut call = COUNT.request()?.query("spaceId", &space_id)?;
        if let Some(filter) = filter {
            call = call.json_body(filter)?;
        }

        self.client.call_api(call).await?.into_data()
    }

    #[tracing::instrument(name = "Search Transactions", skip(self, query))]
    pub async fn search(
        &self,
        space_id: u64,
        query: &EntityQuery,
    ) -> Result<Vec<Transaction>, Error> {
        let call = SEARCH
            .request()?
            .query("spaceId", &space_id)?
            .json_body(query)?;

        self.client.call_api(call).await?.into_data()
    }

    /// Confirms a pending transaction.
    ///
    /// Fails with [`Error::VersioningError`] if `pending.version` is not the current version
    /// of the transaction. Re-read it and retry.
    #[tracing::instrument(
        name = "Confirm Transaction",
        skip(self, pending),
        fields(id = pending.id, version = pending.version)
    )]
    pub async fn confirm(
        &self,
        space_id: u64,
        pending: &TransactionPending,
    ) -> Result<Transaction, Error> {
        let call = CONFIRM
            .request()?
            .query("spaceId", &space_id)?
            .json_body(pending)?;

        self.client.call_api(call).await?.into_data()
    }

    /// Builds the URL of the payment page where the customer completes the transaction.
    #[tracing::instrument(name = "Build Payment Page URL", skip(self))]
    pub async fn build_payment_page_url(&self, space_id: u64, id: u64) -> Result<String, Error> {
        let call = BUILD_PAYMENT_PAGE_URL
            .request()?
            .query("spaceId", &space_id)?
            .query("id", &id)?;

        let url: String = self.client.call_api(call).await?.into_data()?;

        // Some deployments answer with a JSON string literal
        Ok(serde_json::from_str::<String>(&url).unwrap_or(url))
    }
}
