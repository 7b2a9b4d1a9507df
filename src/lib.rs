pub mod http;
pub mod models;

mod hotel;
mod room;

pub use crate::hotel::Hotel;
pub use crate::http::HotelError;
pub use crate::room::{Room, Rooms};
