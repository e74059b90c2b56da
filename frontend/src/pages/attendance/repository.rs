use crate::{
    api::{
        ApiClient, ApiResponse, AttendanceQuery, AttendanceRecord, Employee, EmployeeStats,
        NewAttendance,
    },
    utils::{
        describe_error,
        error_message::{
            DELETE_ATTENDANCE, LOAD_ATTENDANCE, LOAD_EMPLOYEE_OPTIONS, LOAD_EMPLOYEE_STATS,
            MARK_ATTENDANCE,
        },
    },
};

pub async fn fetch_records(
    api: &ApiClient,
    query: &AttendanceQuery,
) -> Result<Vec<AttendanceRecord>, String> {
    api.list_attendance(query)
        .await
        .map(ApiResponse::into_data)
        .map_err(|err| describe_error(&err, &LOAD_ATTENDANCE))
}

/// Employees offered in the filter and form dropdowns.
pub async fn fetch_employee_options(api: &ApiClient) -> Result<Vec<Employee>, String> {
    api.list_employees()
        .await
        .map(ApiResponse::into_data)
        .map_err(|err| describe_error(&err, &LOAD_EMPLOYEE_OPTIONS))
}

pub async fn mark_attendance(
    api: &ApiClient,
    payload: NewAttendance,
) -> Result<AttendanceRecord, String> {
    let created = api
        .create_attendance(&payload)
        .await
        .map(ApiResponse::into_data)
        .map_err(|err| describe_error(&err, &MARK_ATTENDANCE))?;
    log::info!(
        "Marked {} {} on {}",
        created.employee_id,
        created.status,
        created.date
    );
    Ok(created)
}

pub async fn fetch_employee_stats(
    api: &ApiClient,
    employee_id: String,
) -> Result<EmployeeStats, String> {
    api.get_employee_stats(&employee_id)
        .await
        .map(ApiResponse::into_data)
        .map_err(|err| describe_error(&err, &LOAD_EMPLOYEE_STATS))
}

pub async fn delete_record(api: &ApiClient, record_id: i64) -> Result<(), String> {
    api.delete_attendance(record_id)
        .await
        .map_err(|err| describe_error(&err, &DELETE_ATTENDANCE))?;
    log::info!("Deleted attendance record {}", record_id);
    Ok(())
}
