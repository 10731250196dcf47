use secupay_rust::{
    apis::transactions::{TransactionPending, TransactionState},
    error::ErrorKind,
    model::{ClientErrorType, CriteriaOperator, EntityQuery, EntityQueryFilter},
    Error,
};
use serde_json::json;

use crate::{common::test_context::TestContext, integration_tests::helpers};

#[tokio::test]
async fn create_and_read_transaction() {
    let ctx = TestContext::start().await;

    let created = ctx
        .transactions
        .create(ctx.space_id, &helpers::transaction_create("order-1"))
        .await
        .unwrap();

    assert_eq!(created.state, TransactionState::Pending);
    assert_eq!(created.merchant_reference.as_deref(), Some("order-1"));
    assert_eq!(created.line_items.len(), 1);

    let read = ctx.transactions.read(ctx.space_id, created.id).await.unwrap();
    assert_eq!(read, created);
}

#[tokio::test]
async fn confirm_transaction() {
    let ctx = TestContext::start().await;
    let transaction = helpers::create_pending_transaction(&ctx).await.unwrap();

    let confirmed = ctx
        .transactions
        .confirm(
            ctx.space_id,
            &TransactionPending {
                id: transaction.id,
                version: transaction.version,
                merchant_reference: Some("confirmed-order".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(confirmed.id, transaction.id);
    assert_eq!(confirmed.state, TransactionState::Confirmed);
    assert!(confirmed.version > transaction.version);
    assert_eq!(confirmed.merchant_reference.as_deref(), Some("confirmed-order"));
}

#[tokio::test]
async fn confirm_with_stale_version_is_a_versioning_error() {
    let ctx = TestContext::start().await;
    let transaction = helpers::create_pending_transaction(&ctx).await.unwrap();
    let pending = TransactionPending {
        id: transaction.id,
        version: transaction.version,
        merchant_reference: None,
    };

    ctx.transactions
        .confirm(ctx.space_id, &pending)
        .await
        .unwrap();

    // Same version again: the transaction was modified in the meantime
    let err = ctx
        .transactions
        .confirm(ctx.space_id, &pending)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Versioning);
    match err {
        Error::VersioningError(e) => assert_eq!(e.resource_path, "/transaction/confirm"),
        e => panic!("Unexpected error: {}", e),
    }
}

#[tokio::test]
async fn count_and_search_transactions_by_state() {
    let ctx = TestContext::start().await;
    let first = helpers::create_pending_transaction(&ctx).await.unwrap();
    let second = helpers::create_pending_transaction(&ctx).await.unwrap();
    ctx.transactions
        .confirm(
            ctx.space_id,
            &TransactionPending {
                id: second.id,
                version: second.version,
                merchant_reference: None,
            },
        )
        .await
        .unwrap();

    let pending_filter = EntityQueryFilter::and(vec![
        EntityQueryFilter::leaf("state", CriteriaOperator::Equals, json!("PENDING")),
        EntityQueryFilter::leaf("id", CriteriaOperator::Equals, json!(first.id)),
    ]);

    let count = ctx
        .transactions
        .count(ctx.space_id, Some(&pending_filter))
        .await
        .unwrap();
    assert_eq!(count, 1);

    let found = ctx
        .transactions
        .search(
            ctx.space_id,
            &EntityQuery {
                filter: Some(EntityQueryFilter::leaf(
                    "state",
                    CriteriaOperator::Equals,
                    json!("CONFIRMED"),
                )),
                number_of_entities: Some(100),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(found.iter().any(|t| t.id == second.id));
    assert!(found.iter().all(|t| t.state == TransactionState::Confirmed));
}

#[tokio::test]
async fn count_without_filter() {
    let ctx = TestContext::start().await;
    helpers::create_pending_transaction(&ctx).await.unwrap();
    helpers::create_pending_transaction(&ctx).await.unwrap();

    let count = ctx.transactions.count(ctx.space_id, None).await.unwrap();

    assert!(count >= 2);
    if let Some(stored) = ctx.stored_transactions() {
        assert_eq!(count as usize, stored);
    }
}

#[tokio::test]
async fn build_payment_page_url() {
    let ctx = TestContext::start().await;
    let transaction = helpers::create_pending_transaction(&ctx).await.unwrap();

    let url = ctx
        .transactions
        .build_payment_page_url(ctx.space_id, transaction.id)
        .await
        .unwrap();

    assert!(url.starts_with("https://"));
    assert!(url.contains(&format!("transactionId={}", transaction.id)));
}

#[tokio::test]
async fn read_unknown_transaction_is_a_client_error() {
    let ctx = TestContext::start().await;

    let err = ctx
        .transactions
        .read(ctx.space_id, u64::MAX)
        .await
        .unwrap_err();

    match err {
        Error::ApiError(e) => {
            assert_eq!(e.status, 442);
            let client_error = e.client_error().unwrap();
            assert!(client_error.message.is_some());
            assert!(matches!(
                client_error.r#type,
                Some(ClientErrorType::DeveloperError) | Some(ClientErrorType::EndUserError)
            ));
        }
        e => panic!("Unexpected error: {}", e),
    }
}

#[tokio::test]
async fn concurrent_creates_yield_distinct_transactions() {
    let ctx = TestContext::start().await;

    let created = futures::future::join_all(
        (0..8).map(|_| helpers::create_pending_transaction(&ctx)),
    )
    .await
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .unwrap();

    let mut ids = created.iter().map(|t| t.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn wrong_application_key_is_rejected() {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use secupay_rust::{apis::transactions::TransactionsApi, SecupayClient};

    let ctx = TestContext::start().await;
    let user_id = ctx.client.user_id();
    let client = SecupayClient::builder(user_id, BASE64.encode("not the right key"))
        .with_base_path(&ctx.base_path())
        .build()
        .unwrap();

    let err = TransactionsApi::new(client)
        .read(ctx.space_id, 1)
        .await
        .unwrap_err();

    match err {
        Error::ApiError(e) => {
            assert_eq!(e.status, 401);
            assert!(e.client_error().is_none());
        }
        e => panic!("Unexpected error: {}", e),
    }
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn unknown_space_is_a_client_error() {
    let ctx = TestContext::start().await;

    let err = ctx
        .transactions
        .read(ctx.space_id + 1, 1)
        .await
        .unwrap_err();

    match err {
        Error::ApiError(e) => {
            assert_eq!(e.status, 442);
            assert_eq!(
                e.client_error().unwrap().r#type,
                Some(ClientErrorType::EndUserError)
            );
        }
        e => panic!("Unexpected error: {}", e),
    }
}
