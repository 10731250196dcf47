use crate::model::wire_enum;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum ShopifySubscriptionSuspensionState {
        Active => "ACTIVE",
        Ended => "ENDED",
    }
}

wire_enum! {
    /// Who requested the suspension.
    pub enum ShopifySubscriptionSuspensionInitiator {
        Merchant => "MERCHANT",
        Customer => "CUSTOMER",
    }
}

wire_enum! {
    /// What happens to the subscription once the planned end date is reached.
    pub enum ShopifySubscriptionSuspensionAction {
        Reactivate => "REACTIVATE",
        Terminate => "TERMINATE",
    }
}

wire_enum! {
    pub enum ShopifySubscriptionSuspensionType {
        UserInitiatedSuspension => "USER_INITIATED_SUSPENSION",
        PaymentFailureSuspension => "PAYMENT_FAILURE_SUSPENSION",
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopifySubscriptionSuspension {
    pub id: u64,
    pub version: u32,
    pub state: ShopifySubscriptionSuspensionState,
    pub subscription: Option<u64>,
    pub linked_space_id: Option<u64>,
    pub created_on: Option<DateTime<Utc>>,
    pub planned_end_date: Option<DateTime<Utc>>,
    pub effective_end_date: Option<DateTime<Utc>>,
    pub end_action: Option<ShopifySubscriptionSuspensionAction>,
    pub initiator: Option<ShopifySubscriptionSuspensionInitiator>,
    pub r#type: Option<ShopifySubscriptionSuspensionType>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct ShopifySubscriptionSuspensionCreate {
    /// Id of the Shopify subscription to suspend.
    pub subscription: u64,
    pub planned_end_date: DateTime<Utc>,
    pub end_action: ShopifySubscriptionSuspensionAction,
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
