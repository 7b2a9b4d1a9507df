use url::Url;

use crate::http::{self, HotelError};
use crate::models::rooms::GetRoomsResponseItem;
use crate::room::{Room, Rooms};

#[derive(Debug, Clone)]
pub struct Hotel {
    endpoint: Url,
    client: reqwest::Client,
}

impl Hotel {
    pub fn new(endpoint: Url) -> Hotel {
        Hotel::with_client(endpoint, reqwest::Client::new())
    }

    /// Timeouts, pooling and TLS configuration belong to the supplied client.
    pub fn with_client(endpoint: Url, client: reqwest::Client) -> Hotel {
        Hotel { endpoint, client }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn rooms(&self) -> Result<Rooms, HotelError> {
        let response: Vec<GetRoomsResponseItem> =
            http::get(&self.client, self.url("api/hotel/rooms")).await?;

        Ok(response.into_iter().map(Room::new).collect())
    }

    fn url(&self, path: &str) -> Url {
        let mut url = self.endpoint.clone();
        let path = std::path::Path::new(url.path()).join(path);
        // Any non-Unicode sequences are replaced with U+FFFD REPLACEMENT CHARACTER.
        let path = path.to_string_lossy();
        url.set_path(path.as_ref());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_relative_path() {
        let hotel = Hotel::new(Url::parse("http://localhost:8080").unwrap());
        assert_eq!(
            hotel.url("api/hotel/rooms").as_str(),
            "http://localhost:8080/api/hotel/rooms"
        );
    }

    #[test]
    fn url_keeps_endpoint_prefix() {
        let hotel = Hotel::new(Url::parse("http://localhost:8080/backend").unwrap());
        assert_eq!(
            hotel.url("api/hotel/rooms").as_str(),
            "http://localhost:8080/backend/api/hotel/rooms"
        );
    }
}
