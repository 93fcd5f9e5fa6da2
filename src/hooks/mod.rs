pub mod use_app;
pub mod use_query;
pub mod use_session;

pub use use_app::{use_api, use_notifier};
pub use use_query::{use_query, QueryHandle, QueryState};
pub use use_session::use_session;
