use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{Accommodation, CreateReservationRequest, LogEntry, Reservation};

/// Base URL of the reservations backend during development
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client for the backend named by `RESERVATIONS_API_URL` at build time,
    /// falling back to the development default
    pub fn from_build_env() -> Self {
        match option_env!("RESERVATIONS_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url.trim().to_string()),
            _ => Self::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Get every reservation, accommodation names included
    pub async fn get_reservations(&self) -> Result<Vec<Reservation>, String> {
        let url = self.endpoint("reservations");

        match Request::get(&url).send().await {
            Ok(response) => read_json(response, "reservations").await,
            Err(e) => Err(format!("Failed to fetch reservations: {}", e)),
        }
    }

    /// Get every accommodation
    pub async fn get_accommodations(&self) -> Result<Vec<Accommodation>, String> {
        let url = self.endpoint("accommodations");

        match Request::get(&url).send().await {
            Ok(response) => read_json(response, "accommodations").await,
            Err(e) => Err(format!("Failed to fetch accommodations: {}", e)),
        }
    }

    /// Create a reservation; the backend's message is returned on rejection
    pub async fn create_reservation(&self, request: CreateReservationRequest) -> Result<Reservation, String> {
        let url = self.endpoint("reservations");

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Reservation>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Forward a log entry to the server log
    pub async fn send_log(&self, entry: &LogEntry) -> Result<(), String> {
        let url = self.endpoint("logs");

        Request::post(&url)
            .json(entry)
            .map_err(|e| format!("Failed to serialize log entry: {}", e))?
            .send()
            .await
            .map(|_| ())
            .map_err(|e| format!("Failed to send log entry: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("Server error {} fetching {}: {}", status, what, error_text));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", what, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_client_targets_development_backend() {
        let client = ApiClient::new();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.endpoint("logs"), "http://localhost:3000/api/logs");
    }

    #[wasm_bindgen_test]
    fn test_custom_base_url_is_used_for_every_endpoint() {
        let client = ApiClient::with_base_url("https://reservas.example.com/".to_string());
        assert_eq!(client.base_url(), "https://reservas.example.com");
        assert_eq!(client.endpoint("reservations"), "https://reservas.example.com/api/reservations");
        assert_eq!(client.endpoint("logs"), "https://reservas.example.com/api/logs");
    }
}
