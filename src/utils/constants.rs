/// Product name shown in the sidebar and header
pub const APP_TITLE: &str = "Employment Management System";

/// Rows per page in the employee table
pub const EMPLOYEE_PAGE_SIZE: usize = 10;

/// Backend auth endpoints
pub const LOGIN_PATH: &str = "/jwt/create/";
pub const REFRESH_PATH: &str = "/auth/jwt/refresh/";
pub const DASHBOARD_PATH: &str = "/dashboard/";
