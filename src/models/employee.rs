use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EntityId, Role};

/// Hiring pipeline status. Independent of the linked account's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[serde(rename = "Application Received")]
    ApplicationReceived,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    #[serde(rename = "Hired")]
    Hired,
    #[serde(rename = "Not Accepted")]
    NotAccepted,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 4] = [
        EmployeeStatus::ApplicationReceived,
        EmployeeStatus::InterviewScheduled,
        EmployeeStatus::Hired,
        EmployeeStatus::NotAccepted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::ApplicationReceived => "Application Received",
            EmployeeStatus::InterviewScheduled => "Interview Scheduled",
            EmployeeStatus::Hired => "Hired",
            EmployeeStatus::NotAccepted => "Not Accepted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == value)
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Login account attached to an employee row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedAccount {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub designation: String,
    pub department: EntityId,
    pub company: EntityId,
    pub status: EmployeeStatus,
    #[serde(rename = "user", default)]
    pub account: Option<LinkedAccount>,
    #[serde(default)]
    pub hired_on: Option<NaiveDate>,
    #[serde(default)]
    pub days_employed: Option<i64>,
}

/// Account part of an employee write. `password` is only sent on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountFields {
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub designation: String,
    pub department: EntityId,
    pub company: EntityId,
    pub status: EmployeeStatus,
    #[serde(rename = "user")]
    pub account: AccountFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_employee() {
        let json = r#"{
            "id": 11,
            "user": {"id": 5, "username": "jdoe", "email": "jdoe@acme.io", "role": "Employee"},
            "status": "Interview Scheduled",
            "days_employed": null,
            "name": "Jane Doe",
            "email": "jdoe@acme.io",
            "mobile": "5550100",
            "address": "1 Main St",
            "designation": "Engineer",
            "hired_on": null,
            "company": 1,
            "department": 4
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.status, EmployeeStatus::InterviewScheduled);
        let account = employee.account.unwrap();
        assert_eq!(account.role, Role::Employee);
        assert_eq!(account.username.as_deref(), Some("jdoe"));
    }

    #[test]
    fn hired_employee_carries_dates() {
        let json = r#"{"id":1,"name":"A","email":"a@b.co","mobile":"1","address":"x",
            "designation":"d","department":1,"company":1,"status":"Hired",
            "hired_on":"2024-03-01","days_employed":42}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.hired_on, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(employee.days_employed, Some(42));
        assert!(employee.account.is_none());
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<EmployeeStatus>(r#""Promoted""#).is_err());
        assert_eq!(EmployeeStatus::parse("Not Accepted"), Some(EmployeeStatus::NotAccepted));
    }

    #[test]
    fn update_body_omits_password() {
        let fields = EmployeeFields {
            name: "A".into(),
            email: "a@b.co".into(),
            mobile: "1".into(),
            address: "x".into(),
            designation: "d".into(),
            department: 2,
            company: 1,
            status: EmployeeStatus::Hired,
            account: AccountFields {
                username: "a".into(),
                email: "a@b.co".into(),
                role: Role::Manager,
                password: None,
            },
        };
        let body = serde_json::to_value(&fields).unwrap();
        assert_eq!(body["status"], "Hired");
        assert_eq!(body["user"]["role"], "Manager");
        assert!(body["user"].get("password").is_none());
    }
}
