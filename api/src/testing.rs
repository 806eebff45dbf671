use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use kernel::model::{
    event::Event,
    id::{EventId, UserId},
    role::Role,
    user::{EventOrganizer, User},
};
use kernel::repository::{
    auth::MockAuthRepository, event::MockEventRepository, health::MockHealthCheckRepository,
    participation::MockParticipationRepository, user::MockUserRepository,
};
use mockall::predicate::eq;
use registry::AppRegistry;
use tower::ServiceExt;

use crate::{extractor::SESSION_COOKIE, route::v1::routes};

pub(crate) struct Mocks {
    pub health: MockHealthCheckRepository,
    pub auth: MockAuthRepository,
    pub user: MockUserRepository,
    pub event: MockEventRepository,
    pub participation: MockParticipationRepository,
}

impl Mocks {
    pub fn new() -> Self {
        Self {
            health: MockHealthCheckRepository::new(),
            auth: MockAuthRepository::new(),
            user: MockUserRepository::new(),
            event: MockEventRepository::new(),
            participation: MockParticipationRepository::new(),
        }
    }

    // ユーザーのセッションを登録し、Cookie に載せるトークンを返す
    pub fn sign_in(&mut self, user: &User) -> String {
        let token = format!("token-{}", user.user_id);
        let expected = token.clone();
        let user_id = user.user_id;
        self.auth
            .expect_fetch_user_id_from_token()
            .withf(move |t| t.0 == expected)
            .returning(move |_| Ok(Some(user_id)));
        let user = user.clone();
        self.user
            .expect_find_current_user()
            .with(eq(user_id))
            .returning(move |_| Ok(Some(user.clone())));
        token
    }

    pub fn into_router(self) -> Router {
        let registry = AppRegistry::from_repositories(
            Arc::new(self.health),
            Arc::new(self.auth),
            Arc::new(self.user),
            Arc::new(self.event),
            Arc::new(self.participation),
        );
        routes().with_state(registry)
    }
}

pub(crate) fn user(name: &str, role: Role) -> User {
    User {
        user_id: UserId::new(),
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        role,
    }
}

pub(crate) fn organizer() -> User {
    user("Organizer", Role::Organizer)
}

pub(crate) fn attendee() -> User {
    user("Attendee", Role::Attendee)
}

pub(crate) fn sample_event(organizer: &User, attendees_count: i64) -> Event {
    let date = Utc.with_ymd_and_hms(2025, 6, 14, 18, 0, 0).unwrap();
    Event {
        event_id: EventId::new(),
        title: "Summer Jazz Night".into(),
        description: "Open air concert".into(),
        date,
        location: "Cluj-Napoca".into(),
        category: "Music".into(),
        organizer: EventOrganizer {
            organizer_id: organizer.user_id,
            organizer_name: organizer.name.clone(),
        },
        is_canceled: false,
        price: Some(40.0),
        capacity: Some(200),
        image_url: None,
        attendees_count,
        created_at: date,
        updated_at: date,
    }
}

pub(crate) fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("{SESSION_COOKIE}={token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub(crate) async fn send(router: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let res = router.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}
