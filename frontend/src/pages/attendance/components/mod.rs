pub mod filters;
pub mod form;
pub mod stats;
pub mod table;

pub use filters::AttendanceFiltersBar;
pub use form::MarkAttendanceForm;
pub use stats::EmployeeStatsView;
pub use table::AttendanceTable;
