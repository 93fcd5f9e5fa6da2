use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::context::{AppContext, NotificationQueue, Notifier};
use crate::hooks::use_session;
use crate::router::{guard, Access, Route};
use crate::services::Api;

use super::company_pages::{CompanyCreatePage, CompanyDetailPage, CompanyListPage};
use super::dashboard_page::DashboardPage;
use super::department_pages::{DepartmentCreatePage, DepartmentDetailPage, DepartmentListPage};
use super::employee_pages::{EmployeeCreatePage, EmployeeDetailPage, EmployeeListPage, ProfilePage};
use super::layout::Layout;
use super::login_page::LoginPage;
use super::notifications::Toasts;

#[function_component(App)]
pub fn app() -> Html {
    let context = use_memo((), |_| AppContext::new(Api::from_config(&CONFIG)));
    let queue = use_reducer(NotificationQueue::default);
    let notifier = Notifier { queue };

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            <ContextProvider<Notifier> context={notifier}>
                <BrowserRouter>
                    <GuardedRoutes />
                </BrowserRouter>
                <Toasts />
            </ContextProvider<Notifier>>
        </ContextProvider<AppContext>>
    }
}

/// Re-renders on every session change so logout redirects at once
#[function_component(GuardedRoutes)]
fn guarded_routes() -> Html {
    let session = use_session();
    let render = move |route: Route| match guard(&route, &session) {
        Access::Allow => render_route(route),
        Access::Redirect(to) => {
            log::debug!("🚦 [ROUTER] {:?} -> {:?}", route, to);
            html! { <Redirect<Route> {to} /> }
        }
    };
    html! { <Switch<Route> {render} /> }
}

fn render_route(route: Route) -> Html {
    let page = match route {
        Route::Login => return html! { <LoginPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Companies => html! { <CompanyListPage /> },
        Route::CompanyNew => html! { <CompanyCreatePage /> },
        Route::Company { id } => html! { <CompanyDetailPage {id} /> },
        Route::Departments => html! { <DepartmentListPage /> },
        Route::DepartmentNew => html! { <DepartmentCreatePage /> },
        Route::Department { id } => html! { <DepartmentDetailPage {id} /> },
        Route::Employees => html! { <EmployeeListPage /> },
        Route::EmployeeNew => html! { <EmployeeCreatePage /> },
        Route::Employee { id } => html! { <EmployeeDetailPage {id} /> },
        Route::Profile => html! { <ProfilePage /> },
        // guard never allows this one
        Route::NotFound => html! {},
    };
    html! { <Layout>{page}</Layout> }
}
