use crate::model::wire_enum;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum TransactionState {
        Create => "CREATE",
        Pending => "PENDING",
        Confirmed => "CONFIRMED",
        Processing => "PROCESSING",
        Failed => "FAILED",
        Authorized => "AUTHORIZED",
        Voided => "VOIDED",
        Completed => "COMPLETED",
        Fulfill => "FULFILL",
        Decline => "DECLINE",
    }
}

impl TransactionState {
    /// Returns `true` if the transaction cannot change state anymore.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            TransactionState::Failed
                | TransactionState::Voided
                | TransactionState::Fulfill
                | TransactionState::Decline
        )
    }
}

wire_enum! {
    pub enum LineItemType {
        Shipping => "SHIPPING",
        Discount => "DISCOUNT",
        Fee => "FEE",
        Product => "PRODUCT",
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct LineItemCreate {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub unique_id: String,
    #[serde(rename = "type")]
    pub item_type: LineItemType,
    pub quantity: f64,
    pub amount_including_tax: f64,
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[builder(setter(strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_required: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: Option<String>,
    pub unique_id: Option<String>,
    pub r#type: Option<LineItemType>,
    pub quantity: Option<f64>,
    pub amount_including_tax: Option<f64>,
    pub sku: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct AddressCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreate {
    /// ISO 4217 currency code.
    #[builder(setter(into))]
    pub currency: String,
    pub line_items: Vec<LineItemCreate>,
    #[builder(default)]
    pub auto_confirmation_enabled: bool,
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email_address: Option<String>,
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_reference: Option<String>,
    #[builder(setter(strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressCreate>,
    #[builder(setter(strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<AddressCreate>,
}

/// Update of a pending transaction. The version must match the current version of the transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPending {
    pub id: u64,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_reference: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    pub version: u32,
    pub state: TransactionState,
    pub currency: Option<String>,
    pub linked_space_id: Option<u64>,
    pub merchant_reference: Option<String>,
    pub customer_id: Option<String>,
    pub customer_email_address: Option<String>,
    pub language: Option<String>,
    pub authorization_amount: Option<f64>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub billing_address: Option<AddressCreate>,
    pub shipping_address: Option<AddressCreate>,
    pub created_on: Option<DateTime<Utc>>,
}
