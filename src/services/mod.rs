pub mod chat_api;
pub mod client;
pub mod fallback;
pub mod health_api;
pub mod news_api;
pub mod price_api;
