use crate::api::{ApiError, Employee, NewEmployee};

pub const NO_EMPLOYEES: &str = "No employees found";
pub const NO_SEARCH_MATCHES: &str = "No employees match your search";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeDraft {
    pub fn set(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::EmployeeId => self.employee_id = value,
            EmployeeField::FullName => self.full_name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::Department => self.department = value,
        }
    }

    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::FullName => &self.full_name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
        }
    }

    /// Trims every field and checks that none is blank.
    pub fn validate(&self) -> Result<NewEmployee, ApiError> {
        let employee_id = required(&self.employee_id, "Employee ID is required")?;
        let full_name = required(&self.full_name, "Full name is required")?;
        let email = required(&self.email, "Email is required")?;
        if !looks_like_email(&email) {
            return Err(ApiError::validation("Please enter a valid email address"));
        }
        let department = required(&self.department, "Department is required")?;
        Ok(NewEmployee {
            employee_id,
            full_name,
            email,
            department,
        })
    }
}

fn required(value: &str, message: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation(message))
    } else {
        Ok(trimmed.to_string())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// Case-insensitive substring match over id, name and email. The term is used as
/// typed; only an empty term shows everyone.
pub fn filter_employees(employees: &[Employee], term: &str) -> Vec<Employee> {
    if term.is_empty() {
        return employees.to_vec();
    }
    let needle = term.to_lowercase();
    employees
        .iter()
        .filter(|employee| {
            employee.employee_id.to_lowercase().contains(&needle)
                || employee.full_name.to_lowercase().contains(&needle)
                || employee.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn empty_message(total: usize, shown: usize) -> Option<&'static str> {
    match (total, shown) {
        (0, _) => Some(NO_EMPLOYEES),
        (_, 0) => Some(NO_SEARCH_MATCHES),
        _ => None,
    }
}
