use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{
        event::{CreateEvent, DeleteEvent, UpdateEvent},
        Event,
    },
    id::{EventId, UserId},
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

use crate::database::{map_insert_error, model::event::EventRow, ConnectionPool};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        let event_id = EventId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO events
                (event_id, title, description, event_date, location, category,
                organizer_id, price, capacity, image_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(event_id)
        .bind(event.title)
        .bind(event.description)
        .bind(event.date)
        .bind(event.location)
        .bind(event.category)
        .bind(event.organizer_id)
        .bind(event.price)
        .bind(event.capacity)
        .bind(event.image_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            map_insert_error(
                e,
                "Event already exists",
                &[("events_organizer_id_fkey", "Organizer not found")],
            )
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No event record has been created".into(),
            ));
        }

        Ok(event_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        // 参加者数はカウンタとして保持せず、participations を LEFT JOIN して集計する
        sqlx::query_as::<_, EventRow>(
            r#"
                SELECT
                e.event_id,
                e.title,
                e.description,
                e.event_date,
                e.location,
                e.category,
                e.organizer_id,
                u.name AS organizer_name,
                e.is_canceled,
                e.price,
                e.capacity,
                e.image_url,
                COUNT(p.participation_id) AS attendees_count,
                e.created_at,
                e.updated_at
                FROM events AS e
                INNER JOIN users AS u ON e.organizer_id = u.user_id
                LEFT JOIN participations AS p ON p.event_id = e.event_id
                GROUP BY e.event_id, u.name
                ORDER BY e.event_date ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Event::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, EventRow>(
            r#"
                SELECT
                e.event_id,
                e.title,
                e.description,
                e.event_date,
                e.location,
                e.category,
                e.organizer_id,
                u.name AS organizer_name,
                e.is_canceled,
                e.price,
                e.capacity,
                e.image_url,
                COUNT(p.participation_id) AS attendees_count,
                e.created_at,
                e.updated_at
                FROM events AS e
                INNER JOIN users AS u ON e.organizer_id = u.user_id
                LEFT JOIN participations AS p ON p.event_id = e.event_id
                WHERE e.event_id = $1
                GROUP BY e.event_id, u.name
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Event::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_participant(&self, user_id: UserId) -> AppResult<Vec<Event>> {
        // find_all の SQL に、ユーザーの参加登録で絞り込む WHERE 句を追加したもの
        sqlx::query_as::<_, EventRow>(
            r#"
                SELECT
                e.event_id,
                e.title,
                e.description,
                e.event_date,
                e.location,
                e.category,
                e.organizer_id,
                u.name AS organizer_name,
                e.is_canceled,
                e.price,
                e.capacity,
                e.image_url,
                COUNT(p.participation_id) AS attendees_count,
                e.created_at,
                e.updated_at
                FROM events AS e
                INNER JOIN users AS u ON e.organizer_id = u.user_id
                LEFT JOIN participations AS p ON p.event_id = e.event_id
                WHERE e.event_id IN (
                    SELECT event_id FROM participations WHERE user_id = $1
                )
                GROUP BY e.event_id, u.name
                ORDER BY e.event_date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Event::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateEvent) -> AppResult<()> {
        // 主催者本人のイベントでなければ 1 行も更新されない
        let res = sqlx::query(
            r#"
                UPDATE events
                SET
                    title = $1,
                    description = $2,
                    event_date = $3,
                    location = $4,
                    category = COALESCE($5, category),
                    is_canceled = $6,
                    price = COALESCE($7, price),
                    capacity = COALESCE($8, capacity),
                    image_url = COALESCE($9, image_url)
                WHERE event_id = $10 AND organizer_id = $11
            "#,
        )
        .bind(event.title)
        .bind(event.description)
        .bind(event.date)
        .bind(event.location)
        .bind(event.category)
        .bind(event.is_canceled)
        .bind(event.price)
        .bind(event.capacity)
        .bind(event.image_url)
        .bind(event.event_id)
        .bind(event.requested_user)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Event not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteEvent) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // 先に参加登録を削除する。イベントの削除に失敗した場合はロールバックされる
        sqlx::query(
            r#"
                DELETE FROM participations WHERE event_id = $1
            "#,
        )
        .bind(event.event_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let res = sqlx::query(
            r#"
                DELETE FROM events WHERE event_id = $1 AND organizer_id = $2
            "#,
        )
        .bind(event.event_id)
        .bind(event.requested_user)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Event not found".into()));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}
