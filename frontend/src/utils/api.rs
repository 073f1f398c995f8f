use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use crate::config;

/// Thin client for the review API that resolves paths against the backend URL
pub struct Api;

/// A pending request that remembers which path it targets for diagnostics
pub struct RequestWrapper {
    request: Request,
    path: String,
}

impl RequestWrapper {
    fn new(path: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        Self {
            request: Request::get(&full_url).header("Accept", "application/json"),
            path: path.to_string(),
        }
    }

    /// Send the request. Non-2xx responses are returned as-is so callers can
    /// read the error body.
    pub async fn send(self) -> Result<Response, GlooError> {
        match self.request.send().await {
            Ok(response) => {
                if !response.ok() {
                    gloo_console::log!(format!("GET {} returned {}", self.path, response.status()));
                }
                Ok(response)
            }
            Err(e) => {
                gloo_console::error!(format!("GET {} failed: {}", self.path, e));
                Err(e)
            }
        }
    }
}

impl Api {
    /// Create a GET request against the backend URL
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path)
    }
}
