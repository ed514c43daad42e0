pub mod handlers;
pub mod health;
pub mod schema;
