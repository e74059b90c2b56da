use chrono::NaiveDate;
use reqwest::Method;

use super::{
    client::{encode_segment, ApiClient},
    types::{
        ApiError, ApiResponse, AttendanceQuery, AttendanceRecord, DashboardStats, EmployeeStats,
        NewAttendance,
    },
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        query: &AttendanceQuery,
    ) -> Result<ApiResponse<Vec<AttendanceRecord>>, ApiError> {
        let mut builder = self.request(Method::GET, "/api/attendance/");
        let pairs = query.to_query_pairs();
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
        self.send_json(builder).await
    }

    pub async fn get_attendance_by_employee(
        &self,
        employee_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<ApiResponse<Vec<AttendanceRecord>>, ApiError> {
        let path = format!("/api/attendance/employee/{}", encode_segment(employee_id));
        let range = AttendanceQuery {
            employee_id: None,
            start_date,
            end_date,
        };
        let mut builder = self.request(Method::GET, &path);
        let pairs = range.to_query_pairs();
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
        self.send_json(builder).await
    }

    pub async fn create_attendance(
        &self,
        payload: &NewAttendance,
    ) -> Result<ApiResponse<AttendanceRecord>, ApiError> {
        self.send_json(self.request(Method::POST, "/api/attendance/").json(payload))
            .await
    }

    pub async fn delete_attendance(&self, attendance_id: i64) -> Result<ApiResponse<()>, ApiError> {
        let path = format!("/api/attendance/{}", attendance_id);
        self.send_empty(self.request(Method::DELETE, &path)).await
    }

    pub async fn get_employee_stats(
        &self,
        employee_id: &str,
    ) -> Result<ApiResponse<EmployeeStats>, ApiError> {
        let path = format!(
            "/api/attendance/stats/employee/{}",
            encode_segment(employee_id)
        );
        self.send_json(self.request(Method::GET, &path)).await
    }

    pub async fn get_dashboard_stats(&self) -> Result<ApiResponse<DashboardStats>, ApiError> {
        self.send_json(self.request(Method::GET, "/api/attendance/stats/dashboard"))
            .await
    }
}
