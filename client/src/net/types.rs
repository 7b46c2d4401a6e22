//! Wire DTOs for the remote bookings API.
//!
//! DESIGN
//! ======
//! Field names follow the API's JSON (`_id`, `nif`, `companyname`,
//! `availableSlots`, ...) through serde renames so the Rust side can use
//! descriptive names. Numeric fields the API is loose about (prices sent as
//! strings by some endpoints) go through tolerant deserializers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::paths;

/// Account role. The API speaks Portuguese on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "cliente", alias = "client")]
    Client,
    #[serde(rename = "prestador", alias = "provider")]
    Provider,
}

impl Role {
    /// Value of the `userType` field sent on login.
    pub fn user_type(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Provider => "provider",
        }
    }

    /// Landing screen after a successful login.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Client => paths::CLIENT_HOME,
            Self::Provider => paths::PROVIDER_HOME,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Provider => "Provider",
        }
    }
}

/// The signed-in account, persisted verbatim in `localStorage`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Taxpayer number (NIF).
    #[serde(rename = "nif", default)]
    pub tax_id: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    /// Account balance in kwanzas.
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub balance: f64,
}

/// A bookable service offered by a provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "companyname", default)]
    pub company_name: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub price: f64,
    #[serde(rename = "availableSlots", default)]
    pub available_slots: i64,
    #[serde(rename = "providerId", default)]
    pub provider_id: Option<String>,
}

/// Service summary embedded in a client's booking history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookedService {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub price: f64,
}

/// A booking as seen by the client who made it (service populated).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientBooking {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "serviceId", default)]
    pub service: Option<BookedService>,
    #[serde(rename = "clientId", default)]
    pub client_id: String,
    #[serde(rename = "providerId", default)]
    pub provider_id: String,
    #[serde(rename = "reservationDate", default)]
    pub reservation_date: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// A booking as seen by the provider (references only).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderBooking {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "clientId", default)]
    pub client_id: String,
    #[serde(rename = "serviceId", default)]
    pub service_id: String,
    #[serde(rename = "providerId", default)]
    pub provider_id: String,
    #[serde(rename = "reservationDate", default)]
    pub reservation_date: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

// =============================================================
// Requests
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "userType")]
    pub user_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub nif: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookingRequest {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "serviceId")]
    pub service_id: String,
    #[serde(rename = "reservationDate")]
    pub reservation_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteBookingRequest {
    #[serde(rename = "clientId")]
    pub client_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RescheduleRequest {
    #[serde(rename = "newReservationDate")]
    pub new_reservation_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BalanceTopUp {
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub amount: f64,
}

/// Payload for `POST /service`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewService {
    #[serde(rename = "companyname")]
    pub company_name: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "providerId")]
    pub provider_id: String,
}

/// Payload for `PUT /updateService`; slots are updated separately.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceUpdate {
    #[serde(rename = "serviceId")]
    pub service_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "companyname")]
    pub company_name: String,
    #[serde(rename = "providerId")]
    pub provider_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlotsUpdate {
    #[serde(rename = "serviceId")]
    pub service_id: String,
    #[serde(rename = "availableSlots")]
    pub available_slots: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteServiceRequest {
    #[serde(rename = "serviceId")]
    pub service_id: String,
    #[serde(rename = "providerId")]
    pub provider_id: String,
}

// =============================================================
// Responses
// =============================================================

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Reply to `POST /booking`; carries the client's balance after the charge.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BookingResponse {
    #[serde(default, deserialize_with = "deserialize_opt_f64_lenient")]
    pub balance: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServicesEnvelope {
    pub services: Vec<Service>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BookingsEnvelope<T> {
    pub bookings: Vec<T>,
}

/// Error body the API attaches to non-2xx replies.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn number_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<f64, E> {
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| E::custom("expected finite number")),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("expected numeric string, got {text:?}"))),
        _ => Err(E::custom("expected number")),
    }
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    number_from_value(&value)
}

fn deserialize_opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    number_from_value::<D::Error>(&value).map(Some)
}
