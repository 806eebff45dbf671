pub mod auth;
pub mod event;
pub mod participation;
pub mod user;
