use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    event::{
        event::{CreateEvent, DeleteEvent, UpdateEvent},
        Event,
    },
    id::{EventId, UserId},
};

#[mockall::automock]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId>;
    // 開催日の昇順で、参加者数つきのイベント一覧を取得する
    async fn find_all(&self) -> AppResult<Vec<Event>>;
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
    // ユーザーが参加登録しているイベントを取得する
    async fn find_by_participant(&self, user_id: UserId) -> AppResult<Vec<Event>>;
    async fn update(&self, event: UpdateEvent) -> AppResult<()>;
    // イベントと、それに紐づく参加登録をまとめて削除する
    async fn delete(&self, event: DeleteEvent) -> AppResult<()>;
}
