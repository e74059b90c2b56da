use reqwest::Method;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, ApiResponse, Employee, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<ApiResponse<Vec<Employee>>, ApiError> {
        self.send_json(self.request(Method::GET, "/api/employees/"))
            .await
    }

    pub async fn get_employee(&self, employee_id: &str) -> Result<ApiResponse<Employee>, ApiError> {
        let path = format!("/api/employees/{}", encode_segment(employee_id));
        self.send_json(self.request(Method::GET, &path)).await
    }

    pub async fn create_employee(
        &self,
        payload: &NewEmployee,
    ) -> Result<ApiResponse<Employee>, ApiError> {
        self.send_json(self.request(Method::POST, "/api/employees/").json(payload))
            .await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<ApiResponse<()>, ApiError> {
        let path = format!("/api/employees/{}", encode_segment(employee_id));
        self.send_empty(self.request(Method::DELETE, &path)).await
    }
}
