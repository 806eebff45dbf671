use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{postgres::PgConnectOptions, PgPool};

pub mod model;

fn make_pg_connect_options(cfg: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.username)
        .password(&cfg.password)
        .database(&cfg.database)
}

#[derive(Clone)]
pub struct ConnectionPool(PgPool);

impl ConnectionPool {
    pub fn new(pool: PgPool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &PgPool {
        &self.0
    }

    pub async fn begin(&self) -> AppResult<sqlx::Transaction<'_, sqlx::Postgres>> {
        self.0.begin().await.map_err(AppError::TransactionError)
    }
}

// 接続は最初のクエリ実行時に確立され、以降はプールが使い回される
pub fn connect_database_with(cfg: &DatabaseConfig) -> ConnectionPool {
    ConnectionPool(PgPool::connect_lazy_with(make_pg_connect_options(cfg)))
}

// INSERT 時の一意制約違反を Conflict に、外部キー違反を制約名に応じた EntityNotFound に読み替える
pub(crate) fn map_insert_error(
    e: sqlx::Error,
    conflict_message: &str,
    foreign_keys: &[(&str, &str)],
) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(conflict_message.into())
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            let constraint = db_err.constraint();
            match foreign_keys
                .iter()
                .find(|(name, _)| Some(*name) == constraint)
            {
                Some((_, message)) => AppError::EntityNotFound((*message).into()),
                None => AppError::SpecificOperationError(e),
            }
        }
        _ => AppError::SpecificOperationError(e),
    }
}
