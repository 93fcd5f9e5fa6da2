use std::rc::Rc;
use yew::prelude::*;

use crate::context::{AppContext, Notifier};
use crate::services::Api;

#[hook]
pub fn use_api() -> Rc<Api> {
    use_context::<AppContext>()
        .map(|ctx| ctx.api)
        .unwrap_or_else(|| panic!("use_api called outside the AppContext provider"))
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| panic!("use_notifier called outside the Notifier provider"))
}
