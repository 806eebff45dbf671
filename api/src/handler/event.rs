use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{
    event::{event::DeleteEvent, Event},
    id::EventId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        event::{
            CreateEventRequest, CreateEventRequestWithOrganizer, DeleteEventResponse,
            EventDetailResponse, EventSavedResponse, EventsResponse, UpdateEventRequest,
            UpdateEventRequestWithIds,
        },
        from_json_body,
    },
};

const ORGANIZER_ONLY: &str = "Only organizers can edit/delete events";

async fn find_event(registry: &AppRegistry, event_id: EventId) -> AppResult<Event> {
    registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Event not found".into()))
}

// 主催者であること、イベントが存在すること、そのイベントの主催者本人であることを順に確認する
async fn find_owned_event(
    registry: &AppRegistry,
    user: &AuthorizedUser,
    event_id: EventId,
) -> AppResult<Event> {
    user.ensure_organizer(ORGANIZER_ONLY)?;
    let event = find_event(registry, event_id).await?;
    if !event.is_owned_by(user.id()) {
        return Err(AppError::ForbiddenOperation(
            "Not allowed for this event".into(),
        ));
    }
    Ok(event)
}

pub async fn show_event_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventsResponse>> {
    registry
        .event_repository()
        .find_all()
        .await
        .map(EventsResponse::from)
        .map(Json)
}

pub async fn show_event(
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventDetailResponse>> {
    find_event(&registry, event_id)
        .await
        .map(EventDetailResponse::from)
        .map(Json)
}

// ボディは権限を確認した後に読み取る
pub async fn register_event(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<EventSavedResponse>)> {
    user.ensure_organizer("Only organizers can create events")?;
    let req = from_json_body::<CreateEventRequest>(&body)?.normalized();
    req.validate(&())?;

    let event_id = registry
        .event_repository()
        .create(CreateEventRequestWithOrganizer::new(user.id(), req).into())
        .await?;
    tracing::info!(%event_id, organizer_id = %user.id(), "event created");

    let event = find_event(&registry, event_id).await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

pub async fn update_event(
    user: AuthorizedUser,
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
    body: Bytes,
) -> AppResult<Json<EventSavedResponse>> {
    find_owned_event(&registry, &user, event_id).await?;
    let req = from_json_body::<UpdateEventRequest>(&body)?.normalized();
    req.validate(&())?;

    let update_event = UpdateEventRequestWithIds::new(event_id, user.id(), req);
    registry
        .event_repository()
        .update(update_event.into())
        .await?;

    find_event(&registry, event_id)
        .await
        .map(EventSavedResponse::from)
        .map(Json)
}

pub async fn delete_event(
    user: AuthorizedUser,
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DeleteEventResponse>> {
    find_owned_event(&registry, &user, event_id).await?;

    let delete_event = DeleteEvent {
        event_id,
        requested_user: user.id(),
    };
    registry.event_repository().delete(delete_event).await?;
    tracing::info!(%event_id, organizer_id = %user.id(), "event deleted");

    Ok(Json(DeleteEventResponse {
        ok: true,
        deleted: true,
    }))
}

#[cfg(test)]
mod tests {
    use crate::testing::{attendee, organizer, request, sample_event, send, Mocks};
    use axum::http::{Method, StatusCode};
    use kernel::model::id::EventId;
    use serde_json::json;

    fn event_body() -> serde_json::Value {
        json!({
            "title": "Summer Jazz Night",
            "description": "Open air concert",
            "date": "2025-06-14T18:00",
            "location": "Cluj-Napoca",
            "category": "Music",
            "price": 40,
            "capacity": 200
        })
    }

    #[tokio::test]
    async fn list_reports_attendee_counts() {
        let owner = organizer();
        let mut mocks = Mocks::new();
        let events = vec![sample_event(&owner, 3), sample_event(&owner, 0)];
        let first_id = events[0].event_id;
        mocks
            .event
            .expect_find_all()
            .times(1)
            .returning(move || Ok(events.clone()));

        let req = request(Method::GET, "/api/events", None, None);
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["events"][0]["id"], first_id.to_string());
        assert_eq!(body["events"][0]["attendeesCount"], 3);
        assert_eq!(body["events"][1]["attendeesCount"], 0);
    }

    #[tokio::test]
    async fn show_returns_event_and_count() {
        let owner = organizer();
        let event = sample_event(&owner, 7);
        let event_id = event.event_id;
        let mut mocks = Mocks::new();
        mocks
            .event
            .expect_find_by_id()
            .returning(move |_| Ok(Some(event.clone())));

        let req = request(Method::GET, &format!("/api/events/{event_id}"), None, None);
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["attendeesCount"], 7);
        assert_eq!(body["event"]["title"], "Summer Jazz Night");
        assert_eq!(body["event"]["organizerId"], owner.user_id.to_string());
    }

    #[tokio::test]
    async fn show_unknown_event_is_not_found() {
        let mut mocks = Mocks::new();
        mocks.event.expect_find_by_id().returning(|_| Ok(None));

        let uri = format!("/api/events/{}", EventId::new());
        let (status, body) = send(mocks.into_router(), request(Method::GET, &uri, None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["ok"], false);
    }

    #[tokio::test]
    async fn malformed_id_is_bad_request() {
        let mocks = Mocks::new();
        let req = request(Method::GET, "/api/events/not-an-id", None, None);
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], false);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn create_requires_session() {
        let mut mocks = Mocks::new();
        mocks.event.expect_create().never();

        let req = request(Method::POST, "/api/events", None, Some(event_body()));
        let (status, _) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_session_is_unauthorized() {
        let mut mocks = Mocks::new();
        mocks
            .auth
            .expect_fetch_user_id_from_token()
            .returning(|_| Ok(None));
        mocks.event.expect_create().never();

        let req = request(Method::POST, "/api/events", Some("expired"), Some(event_body()));
        let (status, _) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn attendee_cannot_create() {
        let user = attendee();
        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&user);
        mocks.event.expect_create().never();

        let req = request(Method::POST, "/api/events", Some(&token), Some(event_body()));
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Only organizers can create events");
    }

    #[tokio::test]
    async fn organizer_creates_event() {
        let owner = organizer();
        let created = sample_event(&owner, 0);
        let event_id = created.event_id;
        let owner_id = owner.user_id;

        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&owner);
        mocks
            .event
            .expect_create()
            .withf(move |e| {
                e.organizer_id == owner_id && e.title == "Summer Jazz Night" && e.category == "Music"
            })
            .times(1)
            .returning(move |_| Ok(event_id));
        mocks
            .event
            .expect_find_by_id()
            .returning(move |_| Ok(Some(created.clone())));

        let req = request(Method::POST, "/api/events", Some(&token), Some(event_body()));
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["event"]["id"], event_id.to_string());
        assert_eq!(body["event"]["attendeesCount"], 0);
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let owner = organizer();
        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&owner);
        mocks.event.expect_create().never();

        let mut body = event_body();
        body["title"] = json!("   ");
        let req = request(Method::POST, "/api/events", Some(&token), Some(body));
        let (status, _) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&owner);
        let req = request(
            Method::POST,
            "/api/events",
            Some(&token),
            Some(json!({ "title": "No date", "description": "x", "location": "y" })),
        );
        let (status, _) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn other_organizer_cannot_update() {
        let owner = organizer();
        let intruder = organizer();
        let event = sample_event(&owner, 0);
        let event_id = event.event_id;

        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&intruder);
        mocks
            .event
            .expect_find_by_id()
            .returning(move |_| Ok(Some(event.clone())));
        mocks.event.expect_update().never();

        let uri = format!("/api/events/{event_id}");
        let req = request(Method::PUT, &uri, Some(&token), Some(event_body()));
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Not allowed for this event");
    }

    #[tokio::test]
    async fn attendee_cannot_update() {
        let user = attendee();
        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&user);
        mocks.event.expect_find_by_id().never();
        mocks.event.expect_update().never();

        let uri = format!("/api/events/{}", EventId::new());
        let req = request(Method::PUT, &uri, Some(&token), Some(event_body()));
        let (status, _) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn update_unknown_event_is_not_found() {
        let owner = organizer();
        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&owner);
        mocks.event.expect_find_by_id().returning(|_| Ok(None));
        mocks.event.expect_update().never();

        let uri = format!("/api/events/{}", EventId::new());
        let req = request(Method::PUT, &uri, Some(&token), Some(event_body()));
        let (status, _) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn owner_updates_event() {
        let owner = organizer();
        let event = sample_event(&owner, 2);
        let event_id = event.event_id;
        let owner_id = owner.user_id;

        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&owner);
        mocks
            .event
            .expect_find_by_id()
            .returning(move |_| Ok(Some(event.clone())));
        mocks
            .event
            .expect_update()
            .withf(move |e| e.event_id == event_id && e.requested_user == owner_id && e.is_canceled)
            .times(1)
            .returning(|_| Ok(()));

        let mut body = event_body();
        body["isCanceled"] = json!(true);
        let uri = format!("/api/events/{event_id}");
        let req = request(Method::PUT, &uri, Some(&token), Some(body));
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn owner_deletes_event() {
        let owner = organizer();
        let event = sample_event(&owner, 4);
        let event_id = event.event_id;
        let owner_id = owner.user_id;

        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&owner);
        mocks
            .event
            .expect_find_by_id()
            .returning(move |_| Ok(Some(event.clone())));
        mocks
            .event
            .expect_delete()
            .withf(move |e| e.event_id == event_id && e.requested_user == owner_id)
            .times(1)
            .returning(|_| Ok(()));

        let uri = format!("/api/events/{event_id}");
        let req = request(Method::DELETE, &uri, Some(&token), None);
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], true);
    }

    #[tokio::test]
    async fn other_organizer_cannot_delete() {
        let owner = organizer();
        let intruder = organizer();
        let event = sample_event(&owner, 0);
        let event_id = event.event_id;

        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&intruder);
        mocks
            .event
            .expect_find_by_id()
            .returning(move |_| Ok(Some(event.clone())));
        mocks.event.expect_delete().never();

        let uri = format!("/api/events/{event_id}");
        let req = request(Method::DELETE, &uri, Some(&token), None);
        let (status, _) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unsupported_method_is_rejected() {
        let mocks = Mocks::new();
        let req = request(Method::DELETE, "/api/events", None, None);
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["ok"], false);
        assert_eq!(body["message"], "Method Not Allowed");
    }

    #[tokio::test]
    async fn attendee_update_is_forbidden_before_body_check() {
        let user = attendee();
        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&user);
        mocks.event.expect_find_by_id().never();
        mocks.event.expect_update().never();

        let uri = format!("/api/events/{}", EventId::new());
        let req = request(Method::PUT, &uri, Some(&token), Some(json!({})));
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Only organizers can edit/delete events");
    }

    #[tokio::test]
    async fn update_unknown_event_is_not_found_before_body_check() {
        let owner = organizer();
        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&owner);
        mocks.event.expect_find_by_id().returning(|_| Ok(None));
        mocks.event.expect_update().never();

        let uri = format!("/api/events/{}", EventId::new());
        let req = request(Method::PUT, &uri, Some(&token), Some(json!({})));
        let (status, _) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn owner_update_with_invalid_body_is_bad_request() {
        let owner = organizer();
        let event = sample_event(&owner, 0);
        let event_id = event.event_id;

        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&owner);
        mocks
            .event
            .expect_find_by_id()
            .returning(move |_| Ok(Some(event.clone())));
        mocks.event.expect_update().never();

        let uri = format!("/api/events/{event_id}");
        let req = request(Method::PUT, &uri, Some(&token), Some(json!({})));
        let (status, body) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], false);
    }

    #[tokio::test]
    async fn attendee_create_is_forbidden_before_body_check() {
        let user = attendee();
        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&user);
        mocks.event.expect_create().never();

        let req = request(Method::POST, "/api/events", Some(&token), Some(json!({})));
        let (status, _) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn multibyte_title_is_measured_in_characters() {
        let owner = organizer();
        let created = sample_event(&owner, 0);
        let event_id = created.event_id;
        let expected_title = "ș".repeat(100);
        let title = expected_title.clone();

        let mut mocks = Mocks::new();
        let token = mocks.sign_in(&owner);
        mocks
            .event
            .expect_create()
            .withf(move |e| e.title == expected_title && e.location == "Iași")
            .times(1)
            .returning(move |_| Ok(event_id));
        mocks
            .event
            .expect_find_by_id()
            .returning(move |_| Ok(Some(created.clone())));

        let mut body = event_body();
        body["title"] = json!(title);
        body["location"] = json!("  Iași ");
        let req = request(Method::POST, "/api/events", Some(&token), Some(body));
        let (status, _) = send(mocks.into_router(), req).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}
