use chrono::{Duration, Utc};
use secupay_rust::{
    apis::shopify_subscription_suspension::{
        ShopifySubscriptionSuspensionAction, ShopifySubscriptionSuspensionCreate,
        ShopifySubscriptionSuspensionCreateBuilder, ShopifySubscriptionSuspensionState,
    },
    model::{CriteriaOperator, EntityQuery, EntityQueryFilter},
    Error,
};
use serde_json::json;

use crate::common::test_context::TestContext;

fn suspension_create(subscription: u64) -> ShopifySubscriptionSuspensionCreate {
    ShopifySubscriptionSuspensionCreateBuilder::default()
        .subscription(subscription)
        .planned_end_date(Utc::now() + Duration::days(30))
        .end_action(ShopifySubscriptionSuspensionAction::Reactivate)
        .note("Customer on holiday")
        .build()
        .unwrap()
}

fn subscription_id() -> u64 {
    u64::from(uuid::Uuid::new_v4().as_fields().0)
}

#[tokio::test]
async fn suspend_and_read_subscription() {
    let ctx = TestContext::start().await;
    let subscription = subscription_id();

    let suspension = ctx
        .suspensions
        .suspend(ctx.space_id, &suspension_create(subscription))
        .await
        .unwrap();

    assert_eq!(suspension.state, ShopifySubscriptionSuspensionState::Active);
    assert_eq!(suspension.subscription, Some(subscription));
    assert_eq!(
        suspension.end_action,
        Some(ShopifySubscriptionSuspensionAction::Reactivate)
    );

    let read = ctx
        .suspensions
        .read(ctx.space_id, suspension.id)
        .await
        .unwrap();
    assert_eq!(read, suspension);
}

#[tokio::test]
async fn count_and_search_suspensions() {
    let ctx = TestContext::start().await;
    let subscription = subscription_id();
    let suspension = ctx
        .suspensions
        .suspend(ctx.space_id, &suspension_create(subscription))
        .await
        .unwrap();

    let filter = EntityQueryFilter::leaf("subscription", CriteriaOperator::Equals, json!(subscription));

    let count = ctx
        .suspensions
        .count(ctx.space_id, Some(&filter))
        .await
        .unwrap();
    assert_eq!(count, 1);

    let found = ctx
        .suspensions
        .search(
            ctx.space_id,
            &EntityQuery {
                filter: Some(filter),
                number_of_entities: Some(10),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(found, vec![suspension]);
}

#[tokio::test]
async fn reactivate_ends_the_suspension() {
    let ctx = TestContext::start().await;
    let subscription = subscription_id();
    let suspension = ctx
        .suspensions
        .suspend(ctx.space_id, &suspension_create(subscription))
        .await
        .unwrap();

    ctx.suspensions
        .reactivate(ctx.space_id, subscription)
        .await
        .unwrap();

    let read = ctx
        .suspensions
        .read(ctx.space_id, suspension.id)
        .await
        .unwrap();
    assert_eq!(read.state, ShopifySubscriptionSuspensionState::Ended);
    assert!(read.effective_end_date.is_some());
}

#[tokio::test]
async fn reactivate_unsuspended_subscription_is_a_client_error() {
    let ctx = TestContext::start().await;

    let err = ctx
        .suspensions
        .reactivate(ctx.space_id, subscription_id())
        .await
        .unwrap_err();

    match err {
        Error::ApiError(e) => {
            assert_eq!(e.status, 442);
            assert!(e.client_error().is_some());
        }
        e => panic!("Unexpected error: {}", e),
    }
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn suspending_twice_is_a_client_error() {
    let ctx = TestContext::start().await;
    let subscription = subscription_id();
    ctx.suspensions
        .suspend(ctx.space_id, &suspension_create(subscription))
        .await
        .unwrap();

    let err = ctx
        .suspensions
        .suspend(ctx.space_id, &suspension_create(subscription))
        .await
        .unwrap_err();

    match err {
        Error::ApiError(e) => assert_eq!(e.status, 442),
        e => panic!("Unexpected error: {}", e),
    }
}
