pub mod auth;
pub mod session;
pub mod company;
pub mod department;
pub mod employee;
pub mod dashboard;

pub use auth::{LoginRequest, RefreshRequest, TokenPayload};
pub use session::{Role, Session};
pub use company::{Company, CompanyFields};
pub use department::{Department, DepartmentFields};
pub use employee::{AccountFields, Employee, EmployeeFields, EmployeeStatus, LinkedAccount};
pub use dashboard::{DashboardSummary, StatusCount};

/// Primary key of every backend row
pub type EntityId = i64;
