// ============================================================================
// FORMS - Client-side validation before anything is sent
// ============================================================================

use std::collections::BTreeMap;

use crate::models::{
    AccountFields, Company, CompanyFields, Department, DepartmentFields, Employee, EmployeeFields,
    EmployeeStatus, EntityId, Role,
};
use crate::services::{ApiError, HttpTransport, Resource, ResourceClient};

/// Field name -> message shown under that field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Per-field rejections carried by a 4xx, keyed by input name.
    /// Errors not tied to an input are left to the toast.
    pub fn from_api(error: &ApiError) -> Self {
        let mut errors = FormErrors::default();
        let ApiError::Validation { fields, .. } = error else {
            return errors;
        };
        for (field, messages) in fields {
            if field == "non_field_errors" {
                continue;
            }
            // Account errors arrive nested under `user`
            let input = if field == "user" { "username" } else { field.as_str() };
            if let Some(message) = messages.first() {
                errors.add(input, message.clone());
            }
        }
        errors
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    fn require_some<T>(&mut self, field: &'static str, value: &Option<T>, message: &str) {
        if value.is_none() {
            self.add(field, message);
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// `local@domain.tld` with no whitespace, one `@`, and a dotted domain
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// A form that validates into the request body of a resource
pub trait FormModel {
    type Fields;
    fn validate(&self) -> Result<Self::Fields, FormErrors>;
}

#[derive(Debug)]
pub enum SubmitError {
    /// Blocked locally; nothing was sent
    Invalid(FormErrors),
    Api(ApiError),
}

impl SubmitError {
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            SubmitError::Invalid(_) => "Please fix the highlighted fields.".to_string(),
            SubmitError::Api(e) => e.user_message(fallback),
        }
    }
}

/// Validate then `create`
pub async fn submit_create<R, T, F>(client: &ResourceClient<R, T>, form: &F) -> Result<R::Entity, SubmitError>
where
    R: Resource,
    T: HttpTransport,
    F: FormModel<Fields = R::Fields>,
{
    let fields = form.validate().map_err(SubmitError::Invalid)?;
    client.create(&fields).await.map_err(SubmitError::Api)
}

/// Validate then `update` (full replace)
pub async fn submit_update<R, T, F>(
    client: &ResourceClient<R, T>,
    id: EntityId,
    form: &F,
) -> Result<R::Entity, SubmitError>
where
    R: Resource,
    T: HttpTransport,
    F: FormModel<Fields = R::Fields>,
{
    let fields = form.validate().map_err(SubmitError::Invalid)?;
    client.update(id, &fields).await.map_err(SubmitError::Api)
}

// ----------------------------------------------------------------------------
// Company
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyForm {
    pub name: String,
}

impl CompanyForm {
    pub fn from_company(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
        }
    }
}

impl FormModel for CompanyForm {
    type Fields = CompanyFields;

    fn validate(&self) -> Result<CompanyFields, FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("name", &self.name, "Please input the company name!");
        errors.into_result(|| CompanyFields {
            name: self.name.trim().to_string(),
        })
    }
}

// ----------------------------------------------------------------------------
// Department
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentForm {
    pub name: String,
    pub company: Option<EntityId>,
}

impl DepartmentForm {
    pub fn from_department(department: &Department) -> Self {
        Self {
            name: department.name.clone(),
            company: Some(department.company),
        }
    }
}

impl FormModel for DepartmentForm {
    type Fields = DepartmentFields;

    fn validate(&self) -> Result<DepartmentFields, FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("name", &self.name, "Please enter the department name");
        errors.require_some("company", &self.company, "Please select a company");
        match self.company {
            Some(company) if errors.is_empty() => Ok(DepartmentFields {
                name: self.name.trim().to_string(),
                company,
            }),
            _ => Err(errors),
        }
    }
}

// ----------------------------------------------------------------------------
// Employee
// ----------------------------------------------------------------------------

/// Create and edit share one form; `password` is only asked for on create
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub is_new: bool,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub designation: String,
    pub username: String,
    pub password: String,
    pub company: Option<EntityId>,
    pub department: Option<EntityId>,
    pub status: Option<EmployeeStatus>,
    pub role: Option<Role>,
}

impl EmployeeForm {
    pub fn new_employee() -> Self {
        Self {
            is_new: true,
            name: String::new(),
            email: String::new(),
            mobile: String::new(),
            address: String::new(),
            designation: String::new(),
            username: String::new(),
            password: String::new(),
            company: None,
            department: None,
            status: Some(EmployeeStatus::ApplicationReceived),
            role: Some(Role::Employee),
        }
    }

    pub fn from_employee(employee: &Employee) -> Self {
        let account = employee.account.as_ref();
        Self {
            is_new: false,
            name: employee.name.clone(),
            email: employee.email.clone(),
            mobile: employee.mobile.clone(),
            address: employee.address.clone(),
            designation: employee.designation.clone(),
            username: account.and_then(|a| a.username.clone()).unwrap_or_default(),
            password: String::new(),
            company: Some(employee.company),
            department: Some(employee.department),
            status: Some(employee.status),
            role: account.map(|a| a.role),
        }
    }

    /// Changing company clears a department that belongs elsewhere
    pub fn select_company(&mut self, company: Option<EntityId>, departments: &[Department]) {
        self.company = company;
        let still_valid = self.department.is_some_and(|id| {
            departments
                .iter()
                .any(|d| d.id == id && Some(d.company) == company)
        });
        if !still_valid {
            self.department = None;
        }
    }
}

/// Departments offered for the selected company
pub fn departments_for_company(departments: &[Department], company: Option<EntityId>) -> Vec<Department> {
    match company {
        Some(company) => departments
            .iter()
            .filter(|d| d.company == company)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

impl FormModel for EmployeeForm {
    type Fields = EmployeeFields;

    fn validate(&self) -> Result<EmployeeFields, FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("name", &self.name, "Please enter the employee name");
        errors.require("email", &self.email, "Please enter the email");
        if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email");
        }
        errors.require("mobile", &self.mobile, "Please enter the mobile number");
        errors.require("address", &self.address, "Please enter the address");
        errors.require("designation", &self.designation, "Please enter the designation");
        errors.require("username", &self.username, "Please enter a username");
        if self.is_new {
            errors.require("password", &self.password, "Please enter a password");
        }
        errors.require_some("company", &self.company, "Please select a company");
        errors.require_some("department", &self.department, "Please select a department");
        errors.require_some("status", &self.status, "Please select a status");
        errors.require_some("role", &self.role, "Please select a role");

        let (Some(company), Some(department), Some(status), Some(role)) =
            (self.company, self.department, self.status, self.role)
        else {
            return Err(errors);
        };
        let email = self.email.trim().to_string();
        errors.into_result(|| EmployeeFields {
            name: self.name.trim().to_string(),
            email: email.clone(),
            mobile: self.mobile.trim().to_string(),
            address: self.address.trim().to_string(),
            designation: self.designation.trim().to_string(),
            department,
            company,
            status,
            account: AccountFields {
                username: self.username.trim().to_string(),
                email,
                role,
                password: self.is_new.then(|| self.password.clone()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{client_with, logged_in_store, MockTransport};
    use crate::services::DepartmentsClient;
    use std::rc::Rc;

    fn filled_employee() -> EmployeeForm {
        EmployeeForm {
            name: "Jane".into(),
            email: "jane@acme.io".into(),
            mobile: "555".into(),
            address: "1 Main".into(),
            designation: "Engineer".into(),
            username: "jane".into(),
            password: "s3cret".into(),
            company: Some(1),
            department: Some(4),
            ..EmployeeForm::new_employee()
        }
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" jane.doe+x@mail.acme.io "));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@acme"));
        assert!(!is_valid_email("@acme.io"));
        assert!(!is_valid_email("ja ne@acme.io"));
        assert!(!is_valid_email("a@b@c.io"));
        assert!(!is_valid_email("a@b..io"));
    }

    #[test]
    fn company_name_is_required() {
        let errors = CompanyForm { name: "  ".into() }.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Please input the company name!"));
        assert_eq!(CompanyForm { name: " Acme ".into() }.validate().unwrap().name, "Acme");
    }

    #[tokio::test]
    async fn department_without_company_is_blocked_before_any_request() {
        let transport = MockTransport::new();
        let http = Rc::new(client_with(&transport, logged_in_store("tok", Some("ref"))));
        let departments: DepartmentsClient<MockTransport> = ResourceClient::new(http, 60);
        let form = DepartmentForm {
            name: "Sales".into(),
            company: None,
        };

        let result = submit_create(&departments, &form).await;

        match result {
            Err(SubmitError::Invalid(errors)) => {
                assert_eq!(errors.get("company"), Some("Please select a company"));
                assert_eq!(errors.len(), 1);
            }
            other => panic!("expected validation failure, got {:?}", other.map(|d| d.id)),
        }
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn backend_field_rejections_land_under_their_inputs() {
        let transport = MockTransport::new();
        transport.push(
            400,
            r#"{"name":["department with this name already exists."],"non_field_errors":["Try again"]}"#,
        );
        let http = Rc::new(client_with(&transport, logged_in_store("tok", Some("ref"))));
        let departments: DepartmentsClient<MockTransport> = ResourceClient::new(http, 60);
        let form = DepartmentForm {
            name: "Sales".into(),
            company: Some(2),
        };

        let Err(SubmitError::Api(error)) = submit_update(&departments, 4, &form).await else {
            panic!("expected the backend rejection");
        };
        let errors = FormErrors::from_api(&error);

        assert_eq!(errors.get("name"), Some("department with this name already exists."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn nested_account_rejection_maps_to_username() {
        let error = ApiError::from_status(
            400,
            r#"{"user":{"username":["A user with that username already exists."]}}"#,
        );
        let errors = FormErrors::from_api(&error);
        assert_eq!(errors.get("username"), Some("A user with that username already exists."));
    }

    #[test]
    fn server_errors_carry_no_field_messages() {
        let error = ApiError::from_status(500, r#"{"detail":"boom"}"#);
        assert!(FormErrors::from_api(&error).is_empty());
    }

    #[tokio::test]
    async fn valid_department_is_posted() {
        let transport = MockTransport::new();
        transport.push(201, r#"{"id":9,"name":"Sales","company":2,"num_employees":0}"#);
        let http = Rc::new(client_with(&transport, logged_in_store("tok", Some("ref"))));
        let departments: DepartmentsClient<MockTransport> = ResourceClient::new(http, 60);
        let form = DepartmentForm {
            name: "Sales".into(),
            company: Some(2),
        };

        let created = submit_create(&departments, &form).await.unwrap();

        assert_eq!(created.id, 9);
        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["company"], 2);
        assert_eq!(body["name"], "Sales");
    }

    #[test]
    fn employee_create_requires_password_and_valid_email() {
        let mut form = filled_employee();
        form.password.clear();
        form.email = "not-an-email".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("password"), Some("Please enter a password"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
    }

    #[test]
    fn employee_edit_sends_account_without_password() {
        let mut form = filled_employee();
        form.is_new = false;
        form.password.clear();
        form.role = Some(Role::Manager);
        let fields = form.validate().unwrap();
        assert_eq!(fields.account.password, None);
        assert_eq!(fields.account.role, Role::Manager);
        assert_eq!(fields.account.email, "jane@acme.io");
    }

    #[test]
    fn status_and_role_are_independent() {
        for status in EmployeeStatus::ALL {
            for role in Role::ALL {
                let mut form = filled_employee();
                form.status = Some(status);
                form.role = Some(role);
                assert!(form.validate().is_ok(), "{:?}/{:?}", status, role);
            }
        }
    }

    #[test]
    fn switching_company_drops_foreign_department() {
        let departments = vec![
            Department { id: 4, name: "R&D".into(), company: 1, employee_count: 0 },
            Department { id: 5, name: "Ops".into(), company: 2, employee_count: 0 },
        ];
        let mut form = filled_employee();
        form.select_company(Some(2), &departments);
        assert_eq!(form.department, None);
        assert_eq!(departments_for_company(&departments, Some(2)).len(), 1);
        assert!(departments_for_company(&departments, None).is_empty());

        form.department = Some(5);
        form.select_company(Some(2), &departments);
        assert_eq!(form.department, Some(5));
    }
}
