pub mod chat;
pub mod error;
pub mod health;
pub mod news;
pub mod prices;
