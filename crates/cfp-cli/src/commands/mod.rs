pub mod ai;
pub mod auth;
pub mod dispatch;
pub mod issue;
pub mod schema;
pub mod shared;
pub mod sitemap;
pub mod tickets;
