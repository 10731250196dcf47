//! Models shared by all the Secupay APIs.

use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declares a closed enumeration with a fixed set of wire values.
///
/// The generated type serializes to its wire value, lists every allowable value in `ALL`
/// and validates untrusted text through `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
        pub enum $name {
            $( $(#[$variant_meta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every value accepted by the API.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Wire representation of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err($crate::Error::ValidationError(format!(
                        "Invalid value '{}' for {}, must be one of: {}",
                        other,
                        stringify!($name),
                        [$( $wire ),+].join(", "),
                    ))),
                }
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// Environment in which a charge attempt was executed.
    pub enum ChargeAttemptEnvironment {
        Production => "PRODUCTION",
        Test => "TEST",
    }
}

wire_enum! {
    pub enum InvoiceReconciliationRecordState {
        Create => "CREATE",
        Pending => "PENDING",
        Unresolved => "UNRESOLVED",
        Resolved => "RESOLVED",
        Discarded => "DISCARDED",
    }
}

wire_enum! {
    pub enum ShopifyIntegrationPaymentAppVersion {
        #[allow(non_camel_case_types)]
        Api2019_07 => "API_2019_07",
    }
}

wire_enum! {
    /// Who is expected to fix a [`ClientError`](crate::model::ClientError).
    pub enum ClientErrorType {
        EndUserError => "END_USER_ERROR",
        ConfigurationError => "CONFIGURATION_ERROR",
        DeveloperError => "DEVELOPER_ERROR",
    }
}

wire_enum! {
    pub enum CriteriaOperator {
        Contains => "CONTAINS",
        Equals => "EQUALS",
        GreaterThan => "GREATER_THAN",
        GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
        IsNotNull => "IS_NOT_NULL",
        IsNull => "IS_NULL",
        LessThan => "LESS_THAN",
        LessThanOrEqual => "LESS_THAN_OR_EQUAL",
        NotEquals => "NOT_EQUALS",
    }
}

wire_enum! {
    pub enum EntityQueryFilterType {
        Leaf => "LEAF",
        Or => "OR",
        And => "AND",
    }
}

wire_enum! {
    pub enum EntityQueryOrderByType {
        Descending => "DESC",
        Ascending => "ASC",
    }
}

/// Error returned by the API when the request could not be processed because of the client (HTTP 442).
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientError {
    pub date: Option<String>,
    /// Message in the default language (english).
    pub default_message: Option<String>,
    pub id: Option<String>,
    /// Message in the language of the requesting user.
    pub message: Option<String>,
    pub r#type: Option<ClientErrorType>,
}

/// Error returned by the API when the request failed because of the server (HTTP 542).
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerError {
    pub date: Option<String>,
    pub id: Option<String>,
    pub message: Option<String>,
}

/// Query used by `search` operations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EntityQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<EntityQueryFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_entities: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_bys: Vec<EntityQueryOrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_entity: Option<u32>,
}

/// Filter tree used by `count` and `search` operations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityQueryFilter {
    pub r#type: EntityQueryFilterType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<EntityQueryFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<CriteriaOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl EntityQueryFilter {
    /// Leaf filter comparing a single field.
    pub fn leaf(field_name: impl Into<String>, operator: CriteriaOperator, value: Value) -> Self {
        Self {
            r#type: EntityQueryFilterType::Leaf,
            children: Vec::new(),
            field_name: Some(field_name.into()),
            operator: Some(operator),
            value: Some(value),
        }
    }

    /// All children must match.
    pub fn and(children: Vec<EntityQueryFilter>) -> Self {
        Self::branch(EntityQueryFilterType::And, children)
    }

    /// At least one child must match.
    pub fn or(children: Vec<EntityQueryFilter>) -> Self {
        Self::branch(EntityQueryFilterType::Or, children)
    }

    fn branch(r#type: EntityQueryFilterType, children: Vec<EntityQueryFilter>) -> Self {
        Self {
            r#type,
            children,
            field_name: None,
            operator: None,
            value: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityQueryOrderBy {
    pub field_name: String,
    pub sorting: EntityQueryOrderByType,
}

/// Parses `value` into a closed enumeration, returning a validation error for unknown values.
pub fn validate<T>(value: &str) -> Result<T, Error>
where
    T: std::str::FromStr<Err = Error>,
{
    value.parse()
}
