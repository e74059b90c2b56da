use crate::api::{ApiError, ApiErrorKind};

pub const TIMEOUT_MESSAGE: &str = "Request timeout - Backend server may not be responding";
pub const NETWORK_MESSAGE: &str = "Network error - Cannot connect to backend server";
pub const ENDPOINT_NOT_FOUND_MESSAGE: &str = "API endpoint not found (404)";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Per-operation wording. `not_found` and `bad_request` override the server detail
/// for those statuses; when unset the detail (or the fallback) is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCopy {
    pub fallback: &'static str,
    pub not_found: Option<&'static str>,
    pub bad_request: Option<&'static str>,
}

pub const LOAD_EMPLOYEES: ErrorCopy = ErrorCopy {
    fallback: "Failed to load employees",
    not_found: Some(ENDPOINT_NOT_FOUND_MESSAGE),
    bad_request: None,
};

pub const CREATE_EMPLOYEE: ErrorCopy = ErrorCopy {
    fallback: "Failed to create employee",
    not_found: None,
    bad_request: None,
};

pub const DELETE_EMPLOYEE: ErrorCopy = ErrorCopy {
    fallback: "Failed to delete employee",
    not_found: None,
    bad_request: None,
};

pub const LOAD_ATTENDANCE: ErrorCopy = ErrorCopy {
    fallback: "Failed to load attendance records",
    not_found: Some(ENDPOINT_NOT_FOUND_MESSAGE),
    bad_request: None,
};

pub const LOAD_EMPLOYEE_OPTIONS: ErrorCopy = ErrorCopy {
    fallback: "Failed to load employees for dropdown",
    not_found: Some(ENDPOINT_NOT_FOUND_MESSAGE),
    bad_request: None,
};

pub const MARK_ATTENDANCE: ErrorCopy = ErrorCopy {
    fallback: "Failed to mark attendance",
    not_found: Some("Employee not found"),
    bad_request: Some("Invalid attendance data (may be duplicate)"),
};

pub const DELETE_ATTENDANCE: ErrorCopy = ErrorCopy {
    fallback: "Failed to delete attendance record",
    not_found: None,
    bad_request: None,
};

pub const LOAD_EMPLOYEE_STATS: ErrorCopy = ErrorCopy {
    fallback: "Failed to load employee statistics",
    not_found: None,
    bad_request: None,
};

pub const LOAD_DASHBOARD: ErrorCopy = ErrorCopy {
    fallback: "Failed to load dashboard statistics",
    not_found: Some(ENDPOINT_NOT_FOUND_MESSAGE),
    bad_request: None,
};

/// Turns an API failure into the sentence shown to the user.
///
/// Precedence: local validation, timeout, network, 400 override, 404 override,
/// 500, server detail, fallback.
pub fn describe_error(error: &ApiError, copy: &ErrorCopy) -> String {
    match error.kind {
        ApiErrorKind::Validation => return error.message.clone(),
        ApiErrorKind::Timeout => return TIMEOUT_MESSAGE.to_string(),
        ApiErrorKind::Network => return NETWORK_MESSAGE.to_string(),
        ApiErrorKind::Http | ApiErrorKind::Decode => {}
    }

    if let (Some(400), Some(message)) = (error.status, copy.bad_request) {
        return message.to_string();
    }
    if let (Some(404), Some(message)) = (error.status, copy.not_found) {
        return message.to_string();
    }
    if error.status == Some(500) {
        return format!(
            "Server error: {}",
            error.detail.as_deref().unwrap_or(INTERNAL_SERVER_ERROR)
        );
    }
    match error.detail.as_deref() {
        Some(detail) if !detail.trim().is_empty() => detail.to_string(),
        _ => copy.fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_win_over_everything() {
        assert_eq!(
            describe_error(&ApiError::timeout("timeout of 10000ms exceeded"), &LOAD_DASHBOARD),
            TIMEOUT_MESSAGE
        );
        assert_eq!(
            describe_error(&ApiError::network("Network Error"), &LOAD_EMPLOYEES),
            NETWORK_MESSAGE
        );
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let error = ApiError::validation("Please select an employee");
        assert_eq!(
            describe_error(&error, &MARK_ATTENDANCE),
            "Please select an employee"
        );
    }

    #[test]
    fn not_found_uses_operation_copy_or_detail() {
        let error = ApiError::http(404, Some("Employee with ID 'X' not found".into()));
        assert_eq!(
            describe_error(&error, &LOAD_EMPLOYEES),
            ENDPOINT_NOT_FOUND_MESSAGE
        );
        assert_eq!(
            describe_error(&error, &MARK_ATTENDANCE),
            "Employee not found"
        );
        assert_eq!(
            describe_error(&error, &DELETE_EMPLOYEE),
            "Employee with ID 'X' not found"
        );
    }

    #[test]
    fn duplicate_attendance_maps_to_duplicate_copy() {
        let error = ApiError::http(
            400,
            Some("Attendance already marked for employee 'EMP001' on 2025-01-02".into()),
        );
        assert_eq!(
            describe_error(&error, &MARK_ATTENDANCE),
            "Invalid attendance data (may be duplicate)"
        );
        assert_eq!(
            describe_error(&error, &CREATE_EMPLOYEE),
            "Attendance already marked for employee 'EMP001' on 2025-01-02"
        );
    }

    #[test]
    fn server_error_includes_detail_or_default() {
        assert_eq!(
            describe_error(&ApiError::http(500, Some("db down".into())), &LOAD_EMPLOYEES),
            "Server error: db down"
        );
        assert_eq!(
            describe_error(&ApiError::http(500, None), &LOAD_EMPLOYEES),
            "Server error: Internal server error"
        );
    }

    #[test]
    fn falls_back_when_nothing_else_applies() {
        assert_eq!(
            describe_error(&ApiError::http(502, None), &LOAD_ATTENDANCE),
            "Failed to load attendance records"
        );
        assert_eq!(
            describe_error(&ApiError::decode("Failed to parse response"), &LOAD_DASHBOARD),
            "Failed to load dashboard statistics"
        );
    }
}
