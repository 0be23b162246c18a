use shared::LogEntry;
use wasm_bindgen_futures::spawn_local;

use super::api::ApiClient;

/// Forwards log lines to the backend the client talks to, so they end up in
/// the server log
#[derive(Clone, PartialEq)]
pub struct Logger {
    api_client: ApiClient,
}

impl Logger {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    pub fn info_with_component(&self, component: &str, message: &str) {
        self.log("info", message, Some(component.to_string()));
    }

    pub fn error_with_component(&self, component: &str, message: &str) {
        self.log("error", message, Some(component.to_string()));
    }

    fn log(&self, level: &str, message: &str, component: Option<String>) {
        let entry = LogEntry {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };
        let api_client = self.api_client.clone();

        // Send log asynchronously without blocking
        spawn_local(async move {
            if let Err(e) = api_client.send_log(&entry).await {
                gloo::console::warn!(e);
            }
        });
    }
}
