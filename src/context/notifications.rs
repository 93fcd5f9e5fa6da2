// ============================================================================
// NOTIFICATIONS - Toast queue shared through context
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Error => "toast toast-error",
            NotificationKind::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

pub enum NotifyAction {
    Push(NotificationKind, String),
    Dismiss(u32),
}

/// Visible toasts, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: u32,
    pub items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: String) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }
}

impl Reducible for NotificationQueue {
    type Action = NotifyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            NotifyAction::Push(kind, message) => {
                queue.push(kind, message);
            }
            NotifyAction::Dismiss(id) => queue.dismiss(id),
        }
        Rc::new(queue)
    }
}

/// Handle views use to raise a toast
#[derive(Clone, PartialEq)]
pub struct Notifier {
    pub queue: UseReducerHandle<NotificationQueue>,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.queue.dispatch(NotifyAction::Push(NotificationKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.queue.dispatch(NotifyAction::Push(NotificationKind::Error, message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.queue.dispatch(NotifyAction::Push(NotificationKind::Info, message.into()));
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.dispatch(NotifyAction::Dismiss(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_dismiss_removes_one() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationKind::Success, "Saved".into());
        let b = queue.push(NotificationKind::Error, "Failed".into());
        assert_ne!(a, b);
        queue.dismiss(a);
        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].message, "Failed");
    }

    #[test]
    fn reducer_keeps_ids_increasing_after_dismiss() {
        let queue = Rc::new(NotificationQueue::default());
        let queue = queue.reduce(NotifyAction::Push(NotificationKind::Info, "one".into()));
        let queue = queue.reduce(NotifyAction::Dismiss(1));
        let queue = queue.reduce(NotifyAction::Push(NotificationKind::Info, "two".into()));
        assert_eq!(queue.items, vec![Notification {
            id: 2,
            kind: NotificationKind::Info,
            message: "two".into()
        }]);
    }
}
