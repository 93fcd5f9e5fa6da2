use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_api, use_notifier, use_session};
use crate::router::{allowed_areas, Area, Route};
use crate::utils::APP_TITLE;

const MENU: [(Area, Route, &str); 5] = [
    (Area::Dashboard, Route::Dashboard, "Dashboard"),
    (Area::Profile, Route::Profile, "Profile"),
    (Area::Companies, Route::Companies, "Companies"),
    (Area::Departments, Route::Departments, "Departments"),
    (Area::Employees, Route::Employees, "Employees"),
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Sidebar + header frame around every signed-in page
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let session = use_session();
    let current = use_route::<Route>().and_then(|r| r.area());
    let allowed = allowed_areas(session.role);

    let on_logout = Callback::from(move |_: MouseEvent| {
        api.auth.logout();
        notifier.info("You have been logged out");
    });

    let menu = MENU.iter().map(|(area, route, label)| {
        let active = current == Some(*area);
        if allowed.contains(area) {
            html! {
                <li class={classes!("menu-item", active.then_some("active"))}>
                    <Link<Route> to={route.clone()}>{*label}</Link<Route>>
                </li>
            }
        } else {
            html! { <li class="menu-item disabled" aria-disabled="true">{*label}</li> }
        }
    });

    html! {
        <div class="layout">
            <aside class="sidebar">
                <div class="sidebar-title">{APP_TITLE}</div>
                <ul class="menu">{ for menu }</ul>
            </aside>
            <div class="layout-main">
                <header class="layout-header">
                    if let Some(role) = session.role {
                        <span class="header-role">{role.as_str()}</span>
                    }
                    <button class="btn btn-logout" onclick={on_logout}>{"Logout"}</button>
                </header>
                <main class="layout-content">{props.children.clone()}</main>
            </div>
        </div>
    }
}
