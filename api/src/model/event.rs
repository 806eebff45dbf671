use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    event::{
        event::{CreateEvent, UpdateEvent},
        Event, DEFAULT_CATEGORY,
    },
    id::{EventId, UserId},
};
use serde::{Deserialize, Deserializer, Serialize};

use super::not_blank;

// RFC 3339 のほか、フォームから送られる "YYYY-MM-DDTHH:MM" や日付のみの形式（UTC とみなす）を受け付ける
pub fn parse_event_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_event_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_event_date(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {value}")))
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[garde(custom(not_blank), length(chars, max = 120))]
    pub title: String,
    #[garde(custom(not_blank), length(chars, max = 800))]
    pub description: String,
    #[garde(skip)]
    #[serde(deserialize_with = "deserialize_event_date")]
    pub date: DateTime<Utc>,
    #[garde(custom(not_blank), length(chars, max = 120))]
    pub location: String,
    #[garde(length(chars, max = 50))]
    pub category: Option<String>,
    #[garde(range(min = 0.0))]
    pub price: Option<f64>,
    #[garde(range(min = 0))]
    pub capacity: Option<i32>,
    #[garde(skip)]
    pub image_url: Option<String>,
}

impl CreateEventRequest {
    // 文字数の検証は前後の空白を除いた値に対して行う
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            category: trimmed(self.category),
            image_url: trimmed(self.image_url),
            ..self
        }
    }
}

#[derive(new)]
pub struct CreateEventRequestWithOrganizer(UserId, CreateEventRequest);

impl From<CreateEventRequestWithOrganizer> for CreateEvent {
    fn from(value: CreateEventRequestWithOrganizer) -> Self {
        let CreateEventRequestWithOrganizer(
            organizer_id,
            CreateEventRequest {
                title,
                description,
                date,
                location,
                category,
                price,
                capacity,
                image_url,
            },
        ) = value;
        CreateEvent {
            title,
            description,
            date,
            location,
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            price,
            capacity,
            image_url,
            organizer_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[garde(custom(not_blank), length(chars, max = 120))]
    pub title: String,
    #[garde(custom(not_blank), length(chars, max = 800))]
    pub description: String,
    #[garde(skip)]
    #[serde(deserialize_with = "deserialize_event_date")]
    pub date: DateTime<Utc>,
    #[garde(custom(not_blank), length(chars, max = 120))]
    pub location: String,
    #[garde(length(chars, max = 50))]
    pub category: Option<String>,
    // 未指定の場合は開催扱いに戻す
    #[garde(skip)]
    #[serde(default)]
    pub is_canceled: bool,
    #[garde(range(min = 0.0))]
    pub price: Option<f64>,
    #[garde(range(min = 0))]
    pub capacity: Option<i32>,
    #[garde(skip)]
    pub image_url: Option<String>,
}

impl UpdateEventRequest {
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            category: trimmed(self.category),
            image_url: trimmed(self.image_url),
            ..self
        }
    }
}

#[derive(new)]
pub struct UpdateEventRequestWithIds(EventId, UserId, UpdateEventRequest);

impl From<UpdateEventRequestWithIds> for UpdateEvent {
    fn from(value: UpdateEventRequestWithIds) -> Self {
        let UpdateEventRequestWithIds(
            event_id,
            requested_user,
            UpdateEventRequest {
                title,
                description,
                date,
                location,
                category,
                is_canceled,
                price,
                capacity,
                image_url,
            },
        ) = value;
        UpdateEvent {
            event_id,
            title,
            description,
            date,
            location,
            category,
            is_canceled,
            price,
            capacity,
            image_url,
            requested_user,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
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

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            event_id,
            title,
            description,
            date,
            location,
            category,
            organizer,
            is_canceled,
            price,
            capacity,
            image_url,
            attendees_count,
            created_at,
            updated_at,
        } = value;
        Self {
            id: event_id,
            title,
            description,
            date,
            location,
            category,
            organizer_id: organizer.organizer_id,
            organizer_name: organizer.organizer_name,
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub ok: bool,
    pub events: Vec<EventResponse>,
}

impl From<Vec<Event>> for EventsResponse {
    fn from(value: Vec<Event>) -> Self {
        Self {
            ok: true,
            events: value.into_iter().map(EventResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailResponse {
    pub ok: bool,
    pub event: EventResponse,
    pub attendees_count: i64,
}

impl From<Event> for EventDetailResponse {
    fn from(value: Event) -> Self {
        let attendees_count = value.attendees_count;
        Self {
            ok: true,
            event: value.into(),
            attendees_count,
        }
    }
}

// 作成・更新後のイベントを返す
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSavedResponse {
    pub ok: bool,
    pub event: EventResponse,
}

impl From<Event> for EventSavedResponse {
    fn from(value: Event) -> Self {
        Self {
            ok: true,
            event: value.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventResponse {
    pub ok: bool,
    pub deleted: bool,
}
