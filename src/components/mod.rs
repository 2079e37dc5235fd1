pub mod chart;
pub mod chat_panel;
pub mod header;
pub mod news_list;
pub mod price_widget;
pub mod status;
pub mod theme_toggle;

pub use chat_panel::ChatPanel;
pub use header::Header;
pub use news_list::NewsSection;
pub use price_widget::PriceDashboard;
