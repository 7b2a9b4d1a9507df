use std::fmt;

use serde::de::DeserializeOwned;
use url::Url;

#[derive(Debug)]
pub enum HotelError {
    /// Connectivity, DNS or timeout failure before a response was read.
    Connection(reqwest::Error),
    /// The backend answered with a non-success status.
    Status(reqwest::StatusCode),
    /// The body was received but did not match the expected shape.
    Decode(serde_json::Error),
}

impl fmt::Display for HotelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotelError::Connection(e) => write!(f, "request failed: {}", e),
            HotelError::Status(code) => write!(f, "unexpected status {}", code),
            HotelError::Decode(e) => write!(f, "failed to decode response body: {}", e),
        }
    }
}

impl std::error::Error for HotelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HotelError::Connection(e) => Some(e),
            HotelError::Status(_) => None,
            HotelError::Decode(e) => Some(e),
        }
    }
}

pub async fn get<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: Url,
) -> Result<T, HotelError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(HotelError::Connection)?;

    let status = response.status();
    if !status.is_success() {
        return Err(HotelError::Status(status));
    }

    // read the body as text first so a schema mismatch surfaces as Decode
    // rather than being folded into the transport error
    let body = response.text().await.map_err(HotelError::Connection)?;
    serde_json::from_str(&body).map_err(HotelError::Decode)
}
