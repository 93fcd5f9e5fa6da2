pub mod forms;
pub mod pagination;

pub use forms::{
    departments_for_company, is_valid_email, submit_create, submit_update, CompanyForm,
    DepartmentForm, EmployeeForm, FormErrors, FormModel, SubmitError,
};
pub use pagination::Page;
