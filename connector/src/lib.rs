/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod admin;
pub mod applications;
pub mod auth;
pub mod employer;
pub mod jobs;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Matches the frontend's request timeout; the server answers well below it.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

pub const NETWORK_ERROR_MESSAGE: &str = "Lỗi kết nối mạng!";
pub const SERVER_ERROR_MESSAGE: &str = "Lỗi máy chủ!";

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub token: Option<String>,
}

/// Response envelope for endpoints that only acknowledge.
#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope for endpoints returning a single payload under `data`.
#[derive(Serialize, Deserialize, Debug)]
pub struct DataResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    /// Not every endpoint sends it; readers fall back to computing
    /// `ceil(total / limit)` when it is zero.
    #[serde(rename = "totalPages", default)]
    pub total_pages: i64,
}

/// Envelope for paginated list endpoints.
#[derive(Serialize, Deserialize, Debug)]
pub struct Paged<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

pub type RequestType = reqwest::Method;

/// Errors an API call can surface, grouped the way the UI reports them.
/// Server-provided messages pass through verbatim; transport failures and
/// unreadable bodies display the localized fallback messages instead.
#[derive(Debug)]
pub enum ApiError {
    Authentication(String),
    Authorization(String),
    Server(String),
    Network(String),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Authentication(msg) => write!(f, "{}", msg),
            ApiError::Authorization(msg) => write!(f, "{}", msg),
            ApiError::Server(msg) => write!(f, "{}", msg),
            ApiError::Network(_) => write!(f, "{}", NETWORK_ERROR_MESSAGE),
            ApiError::Decode(_) => write!(f, "{}", SERVER_ERROR_MESSAGE),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl ApiError {
    pub fn missing_token() -> Self {
        ApiError::Authentication("Không tìm thấy token xác thực".to_string())
    }

    /// True for expired/invalid-token responses, which invalidate the
    /// locally stored session.
    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> ApiResult<T> {
    let status = res.status();
    let bytes = res.bytes().await?;

    if status.is_success() {
        return serde_json::from_slice::<T>(&bytes).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let message = serde_json::from_slice::<ErrorBody>(&bytes)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            let raw = String::from_utf8_lossy(&bytes).trim().to_string();
            if raw.is_empty() {
                SERVER_ERROR_MESSAGE.to_string()
            } else {
                raw
            }
        });

    Err(match status.as_u16() {
        401 => ApiError::Authentication(message),
        403 => ApiError::Authorization(message),
        _ => ApiError::Server(message),
    })
}

fn get_client(
    config: RequestConfig,
    endpoint: String,
    request_type: RequestType,
    login: bool,
) -> ApiResult<reqwest::RequestBuilder> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let mut client = client.request(
        request_type,
        format!("{}/api/{}", config.server_url, endpoint),
    );

    client = client.header("Content-Type", "application/json");

    if !login {
        return Ok(client);
    }

    let token = if let Some(token) = config.token {
        token
    } else {
        return Err(ApiError::missing_token());
    };

    client = client.header("Authorization", format!("Bearer {}", token));

    Ok(client)
}

/// The health probe lives at the server root, outside the `/api` prefix.
pub async fn health(config: RequestConfig) -> ApiResult<BaseResponse> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let res = client
        .get(format!("{}/health", config.server_url))
        .send()
        .await?;

    parse_response(res).await
}
