use crate::{
    apis::{
        shopify_subscription_suspension::{
            ShopifySubscriptionSuspension, ShopifySubscriptionSuspensionCreate,
        },
        Operation, JSON_UTF8, NO_CONTENT_TYPES,
    },
    model::{EntityQuery, EntityQueryFilter},
    serializer::ResponseType,
    Error, SecupayClient,
};
use reqwest::Method;

pub const COUNT: Operation = Operation {
    name: "count",
    path: "/shopify-subscription-suspension/count",
    method: Method::POST,
    accept: JSON_UTF8,
    content_type: JSON_UTF8,
    response_type: ResponseType::Int,
};

pub const REACTIVATE: Operation = Operation {
    name: "reactivate",
    path: "/shopify-subscription-suspension/reactivate",
    method: Method::POST,
    accept: JSON_UTF8,
    content_type: NO_CONTENT_TYPES,
    response_type: ResponseType::Empty,
};

pub const READ: Operation = Operation {
    name: "read",
    path: "/shopify-subscription-suspension/read",
    method: Method::GET,
    accept: JSON_UTF8,
    content_type: NO_CONTENT_TYPES,
    response_type: ResponseType::Model("ShopifySubscriptionSuspension"),
};

pub const SEARCH: Operation = Operation {
    name: "search",
    path: "/shopify-subscription-suspension/search",
    method: Method::POST,
    accept: JSON_UTF8,
    content_type: JSON_UTF8,
    response_type: ResponseType::ModelArray("ShopifySubscriptionSuspension"),
};

pub const SUSPEND: Operation = Operation {
    name: "suspend",
    path: "/shopify-subscription-suspension/suspend",
    method: Method::POST,
    accept: JSON_UTF8,
    content_type: JSON_UTF8,
    response_type: ResponseType::Model("ShopifySubscriptionSuspension"),
};

/// Every Shopify subscription suspension operation.
pub static OPERATIONS: &[Operation] = &[COUNT, REACTIVATE, READ, SEARCH, SUSPEND];

/// Secupay Shopify subscription suspension APIs client.
#[derive(Clone, Debug)]
pub struct ShopifySubscriptionSuspensionApi {
    client: SecupayClient,
}

impl ShopifySubscriptionSuspensionApi {
    pub fn new(client: SecupayClient) -> Self {
        Self { client }
    }

    /// Counts the suspensions matching the given filter.
    #[tracing::instrument(name = "Count Shopify Subscription Suspensions", skip(self, filter))]
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

    /// Reactivates a suspended subscription.
    #[tracing::instrument(name = "Reactivate Shopify Subscription", skip(self))]
    pub async fn reactivate(&self, space_id: u64, subscription_id: u64) -> Result<(), Error> {
        let call = REACTIVATE
            .request()?
            .query("spaceId", &space_id)?
            .query("subscriptionId", &subscription_id)?;

        self.client.call_api(call).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Read Shopify Subscription Suspension", skip(self))]
    pub async fn read(
        &self,
        space_id: u64,
        id: u64,
    ) -> Result<ShopifySubscriptionSuspension, Error> {
        let call = READ
            .request()?
            .query("spaceId", &space_id)?
            .query("id", &id)?;

        self.client.call_api(call).await?.into_data()
    }

    /// Searches for the suspensions which match the given query.
    #[tracing::instrument(name = "Search Shopify Subscription Suspensions", skip(self, query))]
    pub async fn search(
        &self,
        space_id: u64,
        query: &EntityQuery,
    ) -> Result<Vec<ShopifySubscriptionSuspension>, Error> {
        let call = SEARCH
            .request()?
            .query("spaceId", &space_id)?
            .json_body(query)?;

        self.client.call_api(call).await?.into_data()
    }

    /// Suspends a subscription until its planned end date.
    #[tracing::instrument(
        name = "Suspend Shopify Subscription",
        skip(self, suspension),
        fields(subscription = suspension.subscription)
    )]
    pub async fn suspend(
        &self,
        space_id: u64,
        suspension: &ShopifySubscriptionSuspensionCreate,
    ) -> Result<ShopifySubscriptionSuspension, Error> {
        let call = SUSPEND
            .request()?
            .query("spaceId", &space_id)?
            .json_body(suspension)?;

        self.client.call_api(call).await?.into_data()
    }
}
