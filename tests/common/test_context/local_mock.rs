use crate::common::mock_server::SecupayMockServer;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use secupay_rust::{
    apis::{
        shopify_subscription_suspension::ShopifySubscriptionSuspensionApi,
        transactions::TransactionsApi,
    },
    SecupayClient,
};
use uuid::Uuid;

pub struct TestContext {
    pub client: SecupayClient,
    pub transactions: TransactionsApi,
    pub suspensions: ShopifySubscriptionSuspensionApi,
    pub space_id: u64,
    mock_server: SecupayMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        // Generate a new set of random credentials for this specific test
        let user_id = u64::from(Uuid::new_v4().as_fields().0);
        let application_key = BASE64.encode(Uuid::new_v4().as_bytes());
        let space_id = 4242;

        // Setup a new mock server
        let mock_server = SecupayMockServer::start(user_id, &application_key, space_id).await;

        // Configure a new SecupayClient to point to the mock server
        let client = SecupayClient::builder(user_id, application_key)
            .with_base_path(&mock_server.base_path())
            .build()
            .unwrap();

        Self {
            transactions: TransactionsApi::new(client.clone()),
            suspensions: ShopifySubscriptionSuspensionApi::new(client.clone()),
            client,
            space_id,
            mock_server,
        }
    }

    pub fn base_path(&self) -> String {
        self.mock_server.base_path()
    }

    /// Number of transactions the server actually stored.
    pub fn stored_transactions(&self) -> Option<usize> {
        Some(self.mock_server.transaction_count())
    }
}
