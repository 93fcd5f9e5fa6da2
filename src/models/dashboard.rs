use serde::{Deserialize, Serialize};

use super::EmployeeStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: EmployeeStatus,
    pub count: u32,
}

/// Analytics computed server-side by `GET /dashboard/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_companies: u32,
    pub total_departments: u32,
    pub total_employees: u32,
    #[serde(rename = "employee_status_breakdown", default)]
    pub status_breakdown: Vec<StatusCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dashboard_body() {
        let json = r#"{
            "total_companies": 2,
            "total_departments": 5,
            "total_employees": 9,
            "employee_status_breakdown": [
                {"status": "Hired", "count": 6},
                {"status": "Application Received", "count": 3}
            ]
        }"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_employees, 9);
        assert_eq!(summary.status_breakdown.len(), 2);
        assert_eq!(summary.status_breakdown[0].status, EmployeeStatus::Hired);
    }
}
