//! REST calls to the remote bookings API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending
//! credentials so the API sees the `token` cookie.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; pages turn failures into a
//! notification and leave session state as it was.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    BalanceTopUp, BookingRequest, BookingResponse, ClientBooking, LoginRequest, LoginResponse,
    NewService, ProviderBooking, RegisterRequest, Service, ServiceUpdate, SlotsUpdate,
};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{BookingsEnvelope, ServicesEnvelope};
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

/// Join `segments` onto `base`, percent-encoding each one as a path segment.
#[cfg(any(test, feature = "hydrate"))]
fn endpoint_from(base: &str, segments: &[&str]) -> Result<String, ApiError> {
    let mut url = url::Url::parse(base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidUrl(base.to_owned()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.into())
}

#[cfg(feature = "hydrate")]
fn endpoint(segments: &[&str]) -> Result<String, ApiError> {
    endpoint_from(crate::config::api_base_url(), segments)
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_services(body: &str) -> Result<Vec<Service>, ApiError> {
    decode_body::<ServicesEnvelope>(body).map(|envelope| envelope.services)
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_bookings<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    decode_body::<BookingsEnvelope<T>>(body).map(|envelope| envelope.bookings)
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Method, RequestBuilder};
    use serde::Serialize;
    use web_sys::RequestCredentials;

    use super::ApiError;

    pub(super) fn request(method: Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(url)
            .method(method)
            .credentials(RequestCredentials::Include)
    }

    /// Send without a body and return the response text of a 2xx reply.
    pub(super) async fn send(builder: RequestBuilder) -> Result<String, ApiError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await
    }

    /// Send `body` as JSON and return the response text of a 2xx reply.
    pub(super) async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<String, ApiError> {
        let resp = builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(resp).await
    }

    async fn read(resp: gloo_net::http::Response) -> Result<String, ApiError> {
        let status = resp.status();
        let ok = resp.ok();
        let body = resp.text().await.unwrap_or_default();
        if !ok {
            let err = ApiError::from_status_body(status, &body);
            log::warn!("{} {} -> {err}", resp.url(), status);
            return Err(err);
        }
        Ok(body)
    }
}

#[cfg(feature = "hydrate")]
use gloo_net::http::Method;

// =============================================================
// Accounts
// =============================================================

/// Authenticate via `POST /login`.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected, or the
/// reply lacks `token`/`user`.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["login"])?;
        let body = transport::send_json(transport::request(Method::POST, &url), req).await?;
        decode_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the registration.
pub async fn register(req: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["register"])?;
        transport::send_json(transport::request(Method::POST, &url), req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Add funds to a client's balance via `PUT /updateBalance`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the top-up.
pub async fn top_up_balance(req: &BalanceTopUp) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["updateBalance"])?;
        transport::send_json(transport::request(Method::PUT, &url), req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Client bookings
// =============================================================

/// Fetch the full service catalogue from `GET /getAllServices`.
///
/// # Errors
///
/// Returns an error if the request fails or the reply has no `services` array.
pub async fn fetch_all_services() -> Result<Vec<Service>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["getAllServices"])?;
        let body = transport::send(transport::request(Method::GET, &url)).await?;
        decode_services(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Reserve a service via `POST /booking`. The reply carries the new balance.
///
/// # Errors
///
/// Returns an error if the request fails or the API refuses the booking
/// (no slots left, insufficient balance, ...).
pub async fn create_booking(req: &BookingRequest) -> Result<BookingResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["booking"])?;
        let body = transport::send_json(transport::request(Method::POST, &url), req).await?;
        decode_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a client's bookings from `GET /clientHistory/{client_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the reply has no `bookings` array.
pub async fn fetch_client_bookings(client_id: &str) -> Result<Vec<ClientBooking>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["clientHistory", client_id])?;
        let body = transport::send(transport::request(Method::GET, &url)).await?;
        decode_bookings(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client_id;
        Err(ApiError::Unavailable)
    }
}

/// Cancel a booking via `DELETE /booking/{booking_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API refuses the cancellation.
pub async fn delete_booking(booking_id: &str, client_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["booking", booking_id])?;
        let req = super::types::DeleteBookingRequest { client_id: client_id.to_owned() };
        transport::send_json(transport::request(Method::DELETE, &url), &req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (booking_id, client_id);
        Err(ApiError::Unavailable)
    }
}

/// Move a booking to another day via `PUT /booking/{booking_id}/update-date`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the new date.
pub async fn reschedule_booking(booking_id: &str, new_date: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["booking", booking_id, "update-date"])?;
        let req = super::types::RescheduleRequest { new_reservation_date: new_date.to_owned() };
        transport::send_json(transport::request(Method::PUT, &url), &req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (booking_id, new_date);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Provider services
// =============================================================

/// Fetch a provider's services from `GET /serviceList/{provider_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the reply has no `services` array.
pub async fn fetch_provider_services(provider_id: &str) -> Result<Vec<Service>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["serviceList", provider_id])?;
        let body = transport::send(transport::request(Method::GET, &url)).await?;
        decode_services(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = provider_id;
        Err(ApiError::Unavailable)
    }
}

/// Publish a new service via `POST /service`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the service.
pub async fn create_service(req: &NewService) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["service"])?;
        transport::send_json(transport::request(Method::POST, &url), req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Edit a service's descriptive fields via `PUT /updateService`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the update.
pub async fn update_service(req: &ServiceUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["updateService"])?;
        transport::send_json(transport::request(Method::PUT, &url), req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Change the number of open slots via `PUT /updateSlots`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the slot count.
pub async fn update_slots(req: &SlotsUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["updateSlots"])?;
        transport::send_json(transport::request(Method::PUT, &url), req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Remove a service via `DELETE /deleteService`.
///
/// # Errors
///
/// Returns an error if the request fails or the API refuses the deletion.
pub async fn delete_service(service_id: &str, provider_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["deleteService"])?;
        let req = super::types::DeleteServiceRequest {
            service_id: service_id.to_owned(),
            provider_id: provider_id.to_owned(),
        };
        transport::send_json(transport::request(Method::DELETE, &url), &req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (service_id, provider_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch bookings made against a provider's services from
/// `GET /BookingHistoryByProviderId/{provider_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the reply has no `bookings` array.
pub async fn fetch_provider_bookings(provider_id: &str) -> Result<Vec<ProviderBooking>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&["BookingHistoryByProviderId", provider_id])?;
        let body = transport::send(transport::request(Method::GET, &url)).await?;
        decode_bookings(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = provider_id;
        Err(ApiError::Unavailable)
    }
}
