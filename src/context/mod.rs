pub mod app_context;
pub mod notifications;

pub use app_context::AppContext;
pub use notifications::{Notification, NotificationKind, NotificationQueue, Notifier, NotifyAction};
