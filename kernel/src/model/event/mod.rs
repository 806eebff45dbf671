use crate::model::{
    id::{EventId, UserId},
    user::EventOrganizer,
};
use chrono::{DateTime, Utc};

#[allow(clippy::module_inception)]
pub mod event;

pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub event_id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub category: String,
    pub organizer: EventOrganizer,
    pub is_canceled: bool,
    pub price: Option<f64>,
    pub capacity: Option<i32>,
    pub image_url: Option<String>,
    // participations テーブルの行数を読み出し時に集計した値
    pub attendees_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.organizer.organizer_id == user_id
    }
}
