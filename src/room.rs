use crate::models::rooms::GetRoomsResponseItem;

pub type Rooms = Vec<Room>;

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i64,
    pub number: String,
    pub kind: String,
    pub status: String,
    pub price_per_night: Option<f64>,
}

impl Room {
    pub fn new(room: GetRoomsResponseItem) -> Room {
        Room {
            id: room.id,
            number: room.room_number,
            kind: match room.r#type {
                Some(kind) => kind,
                None => String::new(),
            },
            status: match room.status {
                Some(status) => status,
                None => String::new(),
            },
            price_per_night: room.price_per_night,
        }
    }
}
