use secupay_rust::{
    apis::{
        shopify_subscription_suspension::ShopifySubscriptionSuspensionApi,
        transactions::TransactionsApi,
    },
    SecupayClient,
};

pub struct TestContext {
    pub client: SecupayClient,
    pub transactions: TransactionsApi,
    pub suspensions: ShopifySubscriptionSuspensionApi,
    pub space_id: u64,
    base_path: String,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the required credentials from the env
        let user_id = std::env::var("ACCEPTANCE_TESTS_USER_ID")
            .unwrap()
            .parse()
            .unwrap();
        let application_key = std::env::var("ACCEPTANCE_TESTS_APPLICATION_KEY").unwrap();
        let space_id = std::env::var("ACCEPTANCE_TESTS_SPACE_ID")
            .unwrap()
            .parse()
            .unwrap();

        // Configure a new SecupayClient to point to the given environment, or to the default one
        let mut builder = SecupayClient::builder(user_id, application_key);
        if let Ok(base_path) = std::env::var("ACCEPTANCE_TESTS_BASE_PATH") {
            builder = builder.with_base_path(&base_path);
        }
        let client = builder.build().unwrap();

        Self {
            transactions: TransactionsApi::new(client.clone()),
            suspensions: ShopifySubscriptionSuspensionApi::new(client.clone()),
            base_path: client.base_path().to_string(),
            client,
            space_id,
        }
    }

    pub fn base_path(&self) -> String {
        self.base_path.clone()
    }

    /// The sandbox does not expose its storage.
    pub fn stored_transactions(&self) -> Option<usize> {
        None
    }
}
