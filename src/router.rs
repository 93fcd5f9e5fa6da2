// ============================================================================
// ROUTER / ACCESS GUARD - Paths, role visibility and redirects
// ============================================================================
// Role gating is decided here only; views never check roles for navigation.
// ============================================================================

use std::collections::BTreeSet;
use yew_router::prelude::*;

use crate::models::{EntityId, Role, Session};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/companies")]
    Companies,
    #[at("/companies/new")]
    CompanyNew,
    #[at("/companies/:id")]
    Company { id: EntityId },
    #[at("/departments")]
    Departments,
    #[at("/departments/new")]
    DepartmentNew,
    #[at("/departments/:id")]
    Department { id: EntityId },
    #[at("/employees")]
    Employees,
    #[at("/employees/new")]
    EmployeeNew,
    #[at("/employees/:id")]
    Employee { id: EntityId },
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Groups of views that share a visibility rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Area {
    Login,
    Dashboard,
    Companies,
    Departments,
    Employees,
    Profile,
}

impl Route {
    /// `None` for paths that match no view
    pub fn area(&self) -> Option<Area> {
        match self {
            Route::Login => Some(Area::Login),
            Route::Dashboard => Some(Area::Dashboard),
            Route::Companies | Route::CompanyNew | Route::Company { .. } => Some(Area::Companies),
            Route::Departments | Route::DepartmentNew | Route::Department { .. } => {
                Some(Area::Departments)
            }
            Route::Employees | Route::EmployeeNew | Route::Employee { .. } => Some(Area::Employees),
            Route::Profile => Some(Area::Profile),
            Route::NotFound => None,
        }
    }

    /// List an edit page returns to once its update is saved
    pub fn after_update(&self) -> Option<Route> {
        match self {
            Route::Company { .. } => Some(Route::Companies),
            Route::Department { .. } => Some(Route::Departments),
            Route::Employee { .. } => Some(Route::Employees),
            _ => None,
        }
    }
}

/// Areas reachable for a role; `None` means signed out
pub fn allowed_areas(role: Option<Role>) -> BTreeSet<Area> {
    match role {
        None => BTreeSet::from([Area::Login]),
        Some(Role::Admin) | Some(Role::Manager) => BTreeSet::from([
            Area::Dashboard,
            Area::Companies,
            Area::Departments,
            Area::Employees,
            Area::Profile,
        ]),
        Some(Role::Employee) => BTreeSet::from([Area::Profile]),
    }
}

/// Where a freshly signed-in user starts
pub fn landing_route(role: Option<Role>) -> Route {
    match role {
        Some(Role::Admin) | Some(Role::Manager) => Route::Dashboard,
        Some(Role::Employee) => Route::Profile,
        None => Route::Login,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Allow,
    Redirect(Route),
}

/// Decide whether `route` renders for `session` or where to send the user.
///
/// A session with a token but no role is treated as signed out.
pub fn guard(route: &Route, session: &Session) -> Access {
    let role = if session.is_authenticated() {
        session.role
    } else {
        None
    };
    let allowed = allowed_areas(role);
    match route.area() {
        Some(area) if allowed.contains(&area) => Access::Allow,
        _ => Access::Redirect(landing_route(role)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Option<Role>) -> Session {
        Session {
            access_token: role.map(|_| "tok".to_string()),
            refresh_token: role.map(|_| "ref".to_string()),
            role,
            employee_id: role.map(|_| 5),
        }
    }

    fn protected_routes() -> Vec<Route> {
        vec![
            Route::Dashboard,
            Route::Companies,
            Route::CompanyNew,
            Route::Company { id: 1 },
            Route::Departments,
            Route::DepartmentNew,
            Route::Department { id: 1 },
            Route::Employees,
            Route::EmployeeNew,
            Route::Employee { id: 5 },
            Route::Profile,
        ]
    }

    #[test]
    fn signed_out_user_is_sent_to_login_everywhere() {
        let anon = session(None);
        for route in protected_routes() {
            assert_eq!(guard(&route, &anon), Access::Redirect(Route::Login), "{:?}", route);
        }
        assert_eq!(guard(&Route::Login, &anon), Access::Allow);
        assert_eq!(guard(&Route::NotFound, &anon), Access::Redirect(Route::Login));
    }

    #[test]
    fn employee_is_confined_to_profile() {
        let employee = session(Some(Role::Employee));
        for route in protected_routes() {
            let expected = if route == Route::Profile {
                Access::Allow
            } else {
                Access::Redirect(Route::Profile)
            };
            assert_eq!(guard(&route, &employee), expected, "{:?}", route);
        }
    }

    #[test]
    fn privileged_roles_reach_every_view() {
        for role in [Role::Admin, Role::Manager] {
            let s = session(Some(role));
            for route in protected_routes() {
                assert_eq!(guard(&route, &s), Access::Allow, "{:?} {:?}", role, route);
            }
            assert_eq!(guard(&Route::Login, &s), Access::Redirect(Route::Dashboard));
        }
    }

    #[test]
    fn role_without_token_counts_as_signed_out() {
        let stale = Session {
            access_token: None,
            refresh_token: None,
            role: Some(Role::Admin),
            employee_id: None,
        };
        assert_eq!(guard(&Route::Companies, &stale), Access::Redirect(Route::Login));
    }

    #[test]
    fn paths_parse_to_routes() {
        assert_eq!(Route::recognize("/companies/new"), Some(Route::CompanyNew));
        assert_eq!(Route::recognize("/companies/12"), Some(Route::Company { id: 12 }));
        assert_eq!(Route::recognize("/profile"), Some(Route::Profile));
        assert_eq!(Route::Employee { id: 3 }.to_path(), "/employees/3");
    }

    #[test]
    fn saved_edits_return_to_their_list() {
        assert_eq!(Route::Department { id: 4 }.after_update(), Some(Route::Departments));
        assert_eq!(Route::Company { id: 1 }.after_update(), Some(Route::Companies));
        assert_eq!(Route::Employee { id: 9 }.after_update(), Some(Route::Employees));
        assert_eq!(Route::DepartmentNew.after_update(), None);
        assert_eq!(Route::Profile.after_update(), None);
    }

    #[test]
    fn allowed_areas_per_role() {
        assert_eq!(allowed_areas(Some(Role::Employee)), BTreeSet::from([Area::Profile]));
        assert!(allowed_areas(Some(Role::Manager)).contains(&Area::Employees));
        assert!(!allowed_areas(Some(Role::Admin)).contains(&Area::Login));
    }
}
