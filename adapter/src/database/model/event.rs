use chrono::{DateTime, Utc};
use kernel::model::{
    event::Event,
    id::{EventId, UserId},
    user::EventOrganizer,
};

// events テーブルに主催者名と参加者数を結合した行
#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub event_id: EventId,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub category: String,
    pub organizer_id: UserId,
    pub organizer_name: String,
    pub is_canceled: bool,
    pub price: Option<f64>,
    pub capacity: Option<i32>,
    pub image_url: Option<String>,
    pub attendees_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            title,
            description,
            event_date,
            location,
            category,
            organizer_id,
            organizer_name,
            is_canceled,
            price,
            capacity,
            image_url,
            attendees_count,
            created_at,
            updated_at,
        } = value;
        Event {
            event_id,
            title,
            description,
            date: event_date,
            location,
            category,
            organizer: EventOrganizer {
                organizer_id,
                organizer_name,
            },
            is_canceled,
            price,
            capacity,
            image_url,
            attendees_count,
            created_at,
            updated_at,
        }
    }
}
