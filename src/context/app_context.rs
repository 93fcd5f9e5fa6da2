use std::rc::Rc;

use crate::services::Api;

/// Shared clients handed to every view through a `ContextProvider`
#[derive(Clone)]
pub struct AppContext {
    pub api: Rc<Api>,
}

impl AppContext {
    pub fn new(api: Api) -> Self {
        Self { api: Rc::new(api) }
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
    }
}
