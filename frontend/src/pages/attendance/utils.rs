use crate::{
    api::{ApiError, AttendanceQuery, AttendanceStatus, Employee, NewAttendance},
    utils::time::{format_input_date, parse_date_input, today_in},
};
use chrono_tz::Tz;

pub const ATTENDANCE_MARKED: &str = "Attendance marked successfully!";
pub const NOTICE_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Employee,
    StartDate,
    EndDate,
}

/// Raw filter inputs as typed. Only converted to a query when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilters {
    pub employee_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl AttendanceFilters {
    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Employee => self.employee_id = value,
            FilterField::StartDate => self.start_date = value,
            FilterField::EndDate => self.end_date = value,
        }
    }

    pub fn to_query(&self) -> Result<AttendanceQuery, ApiError> {
        let start_date = parse_date_input(&self.start_date, "Start date must be a valid date")
            .map_err(ApiError::validation)?;
        let end_date = parse_date_input(&self.end_date, "End date must be a valid date")
            .map_err(ApiError::validation)?;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(ApiError::validation(
                    "Start date must be on or before the end date",
                ));
            }
        }
        let employee_id = Some(self.employee_id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Ok(AttendanceQuery {
            employee_id,
            start_date,
            end_date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl AttendanceDraft {
    /// No employee, today's date in `time_zone`, Present.
    pub fn for_today(time_zone: Tz) -> Self {
        Self {
            employee_id: String::new(),
            date: format_input_date(today_in(time_zone)),
            status: AttendanceStatus::default(),
        }
    }

    pub fn validate(&self) -> Result<NewAttendance, ApiError> {
        let employee_id = self.employee_id.trim();
        if employee_id.is_empty() {
            return Err(ApiError::validation("Please select an employee"));
        }
        let date = parse_date_input(&self.date, "Please select a valid date")
            .map_err(ApiError::validation)?
            .ok_or_else(|| ApiError::validation("Please select a date"))?;
        Ok(NewAttendance {
            employee_id: employee_id.to_string(),
            date,
            status: self.status,
        })
    }
}

/// The applied record filters plus a token; bumping the token re-runs the list
/// resource even when the filters are unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordsQuery {
    pub query: AttendanceQuery,
    pub token: u32,
}

impl RecordsQuery {
    pub fn with_query(&self, query: AttendanceQuery) -> Self {
        Self {
            query,
            token: self.token.wrapping_add(1),
        }
    }

    pub fn refresh(&self) -> Self {
        self.with_query(self.query.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    seq: u64,
}

impl NoticeState {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Notice {
            id: self.seq,
            message: message.into(),
        });
        self.seq
    }

    /// Clears the notice only if it is still the one identified by `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
        }
    }
}

/// `Asha Rao (EMP001)`, as listed in the employee dropdowns.
pub fn employee_option_label(employee: &Employee) -> String {
    format!("{} ({})", employee.full_name, employee.employee_id)
}
