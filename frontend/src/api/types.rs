use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Present" => Ok(AttendanceStatus::Present),
            "Absent" => Ok(AttendanceStatus::Absent),
            other => Err(format!("Unknown attendance status: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl AttendanceRecord {
    pub fn employee_name(&self) -> &str {
        self.employee
            .as_ref()
            .map(|employee| employee.full_name.as_str())
            .unwrap_or("N/A")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Filters for attendance listings. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub employee_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl AttendanceQuery {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(employee_id) = &self.employee_id {
            pairs.push(("employee_id", employee_id.clone()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub employee_id: String,
    pub full_name: String,
    pub department: String,
    pub total_present: u32,
    pub total_absent: u32,
    pub total_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_employees: u32,
    pub total_attendance_records: u32,
    pub present_today: u32,
    pub absent_today: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// No response within the request timeout.
    Timeout,
    /// The request never produced a response.
    Network,
    /// The server answered with a non-success status.
    Http,
    /// A success response whose body could not be read.
    Decode,
    /// Rejected locally before any request was sent.
    Validation,
}

impl ApiErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorKind::Timeout => "TIMEOUT",
            ApiErrorKind::Network => "NETWORK_ERROR",
            ApiErrorKind::Http => "HTTP_ERROR",
            ApiErrorKind::Decode => "DECODE_ERROR",
            ApiErrorKind::Validation => "VALIDATION_ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub detail: Option<String>,
}

impl ApiError {
    fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            detail: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, msg)
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Timeout, msg)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, msg)
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, msg)
    }

    pub fn http(status: u16, detail: Option<String>) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("Request failed with status code {status}"),
            status: Some(status),
            detail,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Pulls the `detail` field out of an error body. FastAPI validation errors carry a
/// list of `{ "msg": ... }` objects instead of a string.
pub fn detail_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.clone()),
                    other => other
                        .get("msg")
                        .and_then(|msg| msg.as_str())
                        .map(str::to_string),
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
