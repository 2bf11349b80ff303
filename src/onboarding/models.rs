//! Onboarding data models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::common::ParseError;

/// Account type chosen on the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Shopkeeper,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Shopkeeper => "shopkeeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Ok(Role::Customer),
            "shopkeeper" => Ok(Role::Shopkeeper),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}

/// Snapshot of raw form input keyed by logical field name
/// (`name`, `shippingCity`, `shopPostal`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for `field`; a missing field reads as the empty string.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    /// Present and non-blank values only
    pub fn get_non_empty(&self, field: &str) -> Option<&str> {
        Some(self.get(field).trim()).filter(|v| !v.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Form toggles that change which fields are in scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormFlags {
    pub same_as_shipping: bool,
}

impl Default for FormFlags {
    fn default() -> Self {
        Self {
            same_as_shipping: true,
        }
    }
}

/// Which address block a field key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressScope {
    Shipping,
    Billing,
    Shop,
}

impl AddressScope {
    pub fn prefix(&self) -> &'static str {
        match self {
            AddressScope::Shipping => "shipping",
            AddressScope::Billing => "billing",
            AddressScope::Shop => "shop",
        }
    }

    /// Form key for one address component, e.g. `billing` + `City` -> `billingCity`
    pub fn key(&self, component: &str) -> String {
        format!("{}{}", self.prefix(), component)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal: String,
    pub country: String,
}

impl Address {
    pub fn from_values(values: &FormValues, scope: AddressScope) -> Self {
        let read = |component: &str| values.get(&scope.key(component)).trim().to_string();
        Self {
            street: read("Street"),
            city: read("City"),
            state: read("State"),
            postal: read("Postal"),
            country: read("Country"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    Home,
    Work,
}

impl FromStr for AddressType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "home" => Ok(AddressType::Home),
            "work" => Ok(AddressType::Work),
            _ => Err(ParseError::UnknownAddressType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    #[serde(flatten)]
    pub address: Address,
    #[serde(rename = "type")]
    pub address_type: AddressType,
}

// ============================================================================
// Request Models
// ============================================================================

fn default_same_as_shipping() -> bool {
    true
}

/// Signup form submission
///
/// ```json
/// {
///   "role": "customer",
///   "sameAsShipping": true,
///   "values": { "name": "Jane Doe", "email": "jane@example.com", ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub role: Role,
    #[serde(default = "default_same_as_shipping")]
    pub same_as_shipping: bool,
    #[serde(default)]
    pub values: FormValues,
}

impl SignupRequest {
    pub fn flags(&self) -> FormFlags {
        FormFlags {
            same_as_shipping: self.same_as_shipping,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldValueRequest {
    #[serde(default)]
    pub value: String,
}

// ============================================================================
// Response Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FormValidationResponse {
    pub valid: bool,
    pub errors: crate::common::ErrorMap,
}

#[derive(Debug, Serialize)]
pub struct FieldValidationResponse {
    pub field: crate::fields::FieldKind,
    pub valid: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub payload: SignupPayload,
}

// ============================================================================
// Signup Payload
// ============================================================================

/// Contact details shared by both roles. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSignup {
    #[serde(flatten)]
    pub account: AccountDetails,
    pub dob: String,
    pub shipping: ShippingAddress,
    pub billing: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopkeeperSignup {
    #[serde(flatten)]
    pub account: AccountDetails,
    pub shop_name: String,
    pub shop_address: Address,
    pub logo: Option<String>,
    pub banner: Option<String>,
    pub address_proof: Option<String>,
}

/// Record produced from a signup form that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum SignupPayload {
    Customer(CustomerSignup),
    Shopkeeper(ShopkeeperSignup),
}

impl SignupPayload {
    /// Builds the submitted record. Billing copies shipping when
    /// `sameAsShipping` is set; document references are optional.
    pub fn from_form(request: &SignupRequest) -> Result<Self, ParseError> {
        let values = &request.values;
        let account = AccountDetails {
            name: values.get("name").trim().to_string(),
            email: values.get("email").trim().to_string(),
            phone: values.get("phone").trim().to_string(),
        };

        let payload = match request.role {
            Role::Customer => {
                let shipping = Address::from_values(values, AddressScope::Shipping);
                let billing = if request.same_as_shipping {
                    shipping.clone()
                } else {
                    Address::from_values(values, AddressScope::Billing)
                };

                SignupPayload::Customer(CustomerSignup {
                    account,
                    dob: values.get("dob").to_string(),
                    shipping: ShippingAddress {
                        address: shipping,
                        address_type: values.get("shippingType").parse()?,
                    },
                    billing,
                })
            }
            Role::Shopkeeper => SignupPayload::Shopkeeper(ShopkeeperSignup {
                account,
                shop_name: values.get("shopName").trim().to_string(),
                shop_address: Address::from_values(values, AddressScope::Shop),
                logo: values.get_non_empty("logo").map(str::to_string),
                banner: values.get_non_empty("banner").map(str::to_string),
                address_proof: values.get_non_empty("addressProof").map(str::to_string),
            }),
        };

        Ok(payload)
    }

    pub fn role(&self) -> Role {
        match self {
            SignupPayload::Customer(_) => Role::Customer,
            SignupPayload::Shopkeeper(_) => Role::Shopkeeper,
        }
    }

    pub fn account(&self) -> &AccountDetails {
        match self {
            SignupPayload::Customer(c) => &c.account,
            SignupPayload::Shopkeeper(s) => &s.account,
        }
    }
}
