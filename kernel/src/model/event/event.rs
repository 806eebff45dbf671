use crate::model::id::{EventId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub category: String,
    pub price: Option<f64>,
    pub capacity: Option<i32>,
    pub image_url: Option<String>,
    pub organizer_id: UserId,
}

// category / price / capacity / image_url は None のとき既存の値を維持する
#[derive(Debug)]
pub struct UpdateEvent {
    pub event_id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub category: Option<String>,
    pub is_canceled: bool,
    pub price: Option<f64>,
    pub capacity: Option<i32>,
    pub image_url: Option<String>,
    pub requested_user: UserId,
}

#[derive(Debug)]
pub struct DeleteEvent {
    pub event_id: EventId,
    pub requested_user: UserId,
}
