pub mod auth;
pub mod event;
pub mod id;
pub mod participation;
pub mod role;
pub mod user;
