use serde::{Deserialize, Serialize};

use super::{Department, EntityId, Employee};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "num_departments", alias = "department_count", default)]
    pub department_count: u32,
    #[serde(rename = "num_employees", alias = "employee_count", default)]
    pub employee_count: u32,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// Writable part of a company; counts and nested rows are server-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyFields {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_company_with_nested_rows() {
        let json = r#"{
            "id": 1,
            "name": "Acme",
            "num_departments": 1,
            "num_employees": 0,
            "departments": [{"id": 4, "name": "R&D", "company": 1, "num_employees": 0}],
            "employees": []
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.name, "Acme");
        assert_eq!(company.department_count, 1);
        assert_eq!(company.departments[0].company, 1);
        assert!(company.employees.is_empty());
    }

    #[test]
    fn counts_default_when_absent() {
        let company: Company = serde_json::from_str(r#"{"id": 2, "name": "Bare"}"#).unwrap();
        assert_eq!(company.department_count, 0);
        assert_eq!(company.employee_count, 0);
    }
}
