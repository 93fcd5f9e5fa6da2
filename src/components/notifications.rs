use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::Notification;
use crate::hooks::use_notifier;

/// Toast stack; each toast removes itself after the configured delay
#[function_component(Toasts)]
pub fn toasts() -> Html {
    let notifier = use_notifier();
    html! {
        <div class="toast-stack">
            { for notifier.queue.items.iter().map(|n| html! { <Toast key={n.id} notification={n.clone()} /> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notification: Notification,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let notifier = use_notifier();
    let id = props.notification.id;

    {
        let notifier = notifier.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(CONFIG.notification_timeout_ms, move || notifier.dismiss(id));
            move || drop(timeout)
        });
    }

    let on_close = Callback::from(move |_: MouseEvent| notifier.dismiss(id));

    html! {
        <div class={props.notification.kind.css_class()} role="status">
            <span>{&props.notification.message}</span>
            <button class="toast-close" aria-label="Close" onclick={on_close}>{"×"}</button>
        </div>
    }
}
