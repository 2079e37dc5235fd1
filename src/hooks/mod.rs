pub mod use_api_status;
pub mod use_chat;
pub mod use_news;
pub mod use_prices;
pub mod use_theme;
