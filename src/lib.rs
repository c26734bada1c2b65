pub mod config;
pub mod dtos;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod service;
pub mod store;
pub mod validation;

use diesel_async::AsyncPgConnection;

/// Short-hand for the database pool type to use throughout the app.
pub type DbPool = diesel_async::pooled_connection::bb8::Pool<AsyncPgConnection>;

pub type Conn<'a> = diesel_async::pooled_connection::bb8::PooledConnection<'a, AsyncPgConnection>;
