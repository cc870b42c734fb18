use crate::{
    BookingId, LocationId, ProductTypeId, SpaceId, requests, responses,
};
use jiff::civil::Date;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::responses::{ApiErrorBody, ApiResponse, Paginated};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path)).query(query);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.get("health_check").await?;
        ok_empty(response).await
    }

    // Locations

    pub async fn list_locations(
        &self,
        params: &requests::LocationListParams,
    ) -> Result<Paginated<responses::Location>, ClientError> {
        let response = self.get_with_query("locations", params).await?;
        ok_body(response).await
    }

    pub async fn get_location(
        &self,
        location_id: &LocationId,
    ) -> Result<responses::Location, ClientError> {
        let response = self.get(&format!("locations/{location_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_location(
        &self,
        details: &crate::Location,
    ) -> Result<responses::Location, ClientError> {
        let response = self.post("locations", details).await?;
        ok_body(response).await
    }

    pub async fn update_location(
        &self,
        location_id: &LocationId,
        details: &crate::Location,
    ) -> Result<responses::Location, ClientError> {
        let response =
            self.put(&format!("locations/{location_id}"), details).await?;
        ok_body(response).await
    }

    /// Fails while the location still has spaces.
    pub async fn delete_location(
        &self,
        location_id: &LocationId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("locations/{location_id}")).await?;
        ok_empty(response).await
    }

    // Spaces

    pub async fn list_spaces(
        &self,
        params: &requests::SpaceListParams,
    ) -> Result<Paginated<responses::Space>, ClientError> {
        let response = self.get_with_query("spaces", params).await?;
        ok_body(response).await
    }

    pub async fn get_space(
        &self,
        space_id: &SpaceId,
    ) -> Result<responses::Space, ClientError> {
        let response = self.get(&format!("spaces/{space_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_space(
        &self,
        details: &crate::Space,
    ) -> Result<responses::Space, ClientError> {
        let response = self.post("spaces", details).await?;
        ok_body(response).await
    }

    pub async fn update_space(
        &self,
        space_id: &SpaceId,
        details: &crate::Space,
    ) -> Result<responses::Space, ClientError> {
        let response = self.put(&format!("spaces/{space_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_space(
        &self,
        space_id: &SpaceId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("spaces/{space_id}")).await?;
        ok_empty(response).await
    }

    /// Aggregate statistics over every space in scope, not just one page.
    pub async fn space_stats(
        &self,
        params: &requests::StatsParams,
    ) -> Result<responses::SpaceStats, ClientError> {
        let response = self.get_with_query("spaces/stats", params).await?;
        ok_body(response).await
    }

    pub async fn space_availability(
        &self,
        space_id: &SpaceId,
        date: Date,
    ) -> Result<responses::SpaceAvailability, ClientError> {
        let response = self
            .get_with_query(
                &format!("spaces/{space_id}/availability"),
                &requests::AvailabilityParams { date },
            )
            .await?;
        ok_body(response).await
    }

    // Product types

    pub async fn list_product_types(
        &self,
        params: &requests::ProductTypeListParams,
    ) -> Result<Paginated<responses::ProductType>, ClientError> {
        let response = self.get_with_query("product-types", params).await?;
        ok_body(response).await
    }

    pub async fn get_product_type(
        &self,
        product_type_id: &ProductTypeId,
    ) -> Result<responses::ProductType, ClientError> {
        let response =
            self.get(&format!("product-types/{product_type_id}")).await?;
        ok_body(response).await
    }

    /// Creating a type with auto-generation enabled also creates its spaces.
    pub async fn create_product_type(
        &self,
        details: &crate::ProductType,
    ) -> Result<responses::ProductType, ClientError> {
        let response = self.post("product-types", details).await?;
        ok_body(response).await
    }

    pub async fn update_product_type(
        &self,
        product_type_id: &ProductTypeId,
        details: &crate::ProductType,
    ) -> Result<responses::ProductType, ClientError> {
        let response = self
            .put(&format!("product-types/{product_type_id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_product_type(
        &self,
        product_type_id: &ProductTypeId,
    ) -> Result<(), ClientError> {
        let response =
            self.delete(&format!("product-types/{product_type_id}")).await?;
        ok_empty(response).await
    }

    pub async fn generate_spaces(
        &self,
        product_type_id: &ProductTypeId,
        details: &requests::GenerateSpaces,
    ) -> Result<Vec<responses::Space>, ClientError> {
        let response = self
            .post(
                &format!("product-types/{product_type_id}/generate-spaces"),
                details,
            )
            .await?;
        ok_body(response).await
    }

    // Bookings

    pub async fn list_bookings(
        &self,
        params: &requests::BookingListParams,
    ) -> Result<Paginated<responses::Booking>, ClientError> {
        let response = self.get_with_query("bookings", params).await?;
        ok_body(response).await
    }

    pub async fn get_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::Booking, ClientError> {
        let response = self.get(&format!("bookings/{booking_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_booking(
        &self,
        details: &requests::CreateBooking,
    ) -> Result<responses::Booking, ClientError> {
        let response = self.post("bookings", details).await?;
        ok_body(response).await
    }

    pub async fn cancel_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::Booking, ClientError> {
        let response = self
            .empty_post(&format!("bookings/{booking_id}/cancel"))
            .await?;
        ok_body(response).await
    }

    pub async fn booking_stats(
        &self,
        params: &requests::StatsParams,
    ) -> Result<responses::BookingStats, ClientError> {
        let response = self.get_with_query("bookings/stats", params).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the server's message.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Unwrap the data of a successful response envelope, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    let envelope = response.json::<ApiResponse<T>>().await?;
    Ok(envelope.data)
}

/// Check that a response without meaningful data is OK, returning a
/// ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return ClientError::Network(e),
    };
    let message = error_message(&text);
    ClientError::APIError(status, message)
}

/// Extract the human-readable message from an error body, falling back to
/// the raw text when it isn't an error envelope.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(error) => match error.errors {
            Some(fields) if !fields.is_empty() => {
                let details = fields
                    .iter()
                    .map(|(field, msg)| format!("{field}: {msg}"))
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("{} ({details})", error.message)
            }
            _ => error.message,
        },
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::error_message;

    #[test]
    fn error_envelope_message_is_used() {
        let body = r#"{"success":false,"message":"Location not found"}"#;
        assert_eq!(error_message(body), "Location not found");
    }

    #[test]
    fn field_errors_are_appended() {
        let body = r#"{"success":false,"message":"Validation failed","errors":{"rates":"At least one rate is required"}}"#;
        assert_eq!(
            error_message(body),
            "Validation failed (rates: At least one rate is required)"
        );
    }

    #[test]
    fn plain_text_bodies_pass_through() {
        assert_eq!(error_message("Bad gateway"), "Bad gateway");
    }
}
