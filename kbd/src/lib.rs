pub mod catalog;
pub mod config;
pub mod proto;
pub mod router;
pub mod services;

pub use kb_query as query;
