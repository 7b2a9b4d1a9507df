use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRoomsResponseItem {
    pub id: i64,
    pub room_number: String,

    #[serde(rename = "type")]
    pub r#type: Option<String>,

    pub status: Option<String>,
    pub price_per_night: Option<f64>,
}
