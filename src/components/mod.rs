pub mod app;
pub mod company_pages;
pub mod dashboard_page;
pub mod department_pages;
pub mod employee_pages;
pub mod layout;
pub mod login_page;
pub mod notifications;
pub mod shared;

pub use app::App;
