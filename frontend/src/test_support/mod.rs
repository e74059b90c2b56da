#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use chrono::NaiveDate;

    pub fn employee(employee_id: &str, full_name: &str, department: &str) -> Employee {
        Employee {
            id: None,
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: format!("{}@example.com", employee_id.to_lowercase()),
            department: department.into(),
            created_at: None,
        }
    }

    pub fn staff() -> Vec<Employee> {
        vec![
            employee("EMP001", "Asha Rao", "Engineering"),
            employee("EMP002", "Ravi Kumar", "Finance"),
            employee("EMP003", "Meera Nair", "Engineering"),
        ]
    }

    pub fn record(
        id: i64,
        employee: &Employee,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: employee.employee_id.clone(),
            date,
            status,
            employee: Some(employee.clone()),
            created_at: None,
        }
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
