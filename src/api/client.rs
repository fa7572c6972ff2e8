//! HTTP API Client
//!
//! Functions for communicating with the agent REST API. Every endpoint is
//! a plain HTTP POST; failures are mapped to display strings and surfaced
//! as toasts by the callers. No retry, no timeout, no request cancellation.

use gloo_net::http::Request;

use crate::state::global::AnalysisReport;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// localStorage key for a custom API base URL
const API_BASE_STORAGE_KEY: &str = "agent_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_STORAGE_KEY, url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ChatResponse {
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    token_type: String,
}

/// Error body the backend returns for non-2xx responses
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub detail: String,
}

impl ApiError {
    fn unknown() -> Self {
        ApiError {
            detail: "Unknown error".to_string(),
        }
    }
}

// ============ API Functions ============

/// Send one chat message and return the AI reply text
pub async fn send_chat(message: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest {
        message: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chat", api_base))
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or_else(|_| ApiError::unknown());
        return Err(error.detail);
    }

    let result: ChatResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.message)
}

/// Upload a spreadsheet/CSV file for analysis
pub async fn analyze_file(file: &web_sys::File) -> Result<AnalysisReport, String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Failed to attach file".to_string())?;

    let response = Request::post(&format!("{}/analyze", api_base))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or_else(|_| ApiError::unknown());
        return Err(error.detail);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Exchange credentials for an access token
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    let api_base = get_api_base();

    // OAuth2 password form, urlencoded
    let body = format!(
        "username={}&password={}",
        String::from(js_sys::encode_uri_component(username)),
        String::from(js_sys::encode_uri_component(password)),
    );

    let response = Request::post(&format!("{}/token", api_base))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or_else(|_| ApiError {
            detail: "Login failed".to_string(),
        });
        return Err(error.detail);
    }

    let result: TokenResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.access_token)
}

/// Create a new account
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        username: String,
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/users", api_base))
        .json(&RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or_else(|_| ApiError {
            detail: "Registration failed".to_string(),
        });
        return Err(error.detail);
    }

    Ok(())
}
