use secupay_rust::apis::transactions::{
    LineItemCreateBuilder, LineItemType, Transaction, TransactionCreate,
    TransactionCreateBuilder,
};
use uuid::Uuid;

use crate::common::test_context::TestContext;

pub fn transaction_create(merchant_reference: &str) -> TransactionCreate {
    TransactionCreateBuilder::default()
        .currency("CHF")
        .language("en-US")
        .customer_email_address("test@domain.com")
        .merchant_reference(merchant_reference)
        .line_items(vec![LineItemCreateBuilder::default()
            .name("Red T-Shirt")
            .unique_id(Uuid::new_v4().to_string())
            .item_type(LineItemType::Product)
            .quantity(2.0)
            .amount_including_tax(29.95)
            .sku("red-t-shirt-789")
            .build()
            .unwrap()])
        .build()
        .unwrap()
}

pub async fn create_pending_transaction(ctx: &TestContext) -> Result<Transaction, anyhow::Error> {
    let reference = format!("order-{}", Uuid::new_v4());
    let transaction = ctx
        .transactions
        .create(ctx.space_id, &transaction_create(&reference))
        .await?;

    Ok(transaction)
}
