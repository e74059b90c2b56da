use crate::{
    api::{ApiClient, ApiResponse, Employee, NewEmployee},
    utils::{
        describe_error,
        error_message::{CREATE_EMPLOYEE, DELETE_EMPLOYEE, LOAD_EMPLOYEES},
    },
};

pub async fn fetch_employees(api: &ApiClient) -> Result<Vec<Employee>, String> {
    api.list_employees()
        .await
        .map(ApiResponse::into_data)
        .map_err(|err| describe_error(&err, &LOAD_EMPLOYEES))
}

pub async fn create_employee(api: &ApiClient, payload: NewEmployee) -> Result<Employee, String> {
    let created = api
        .create_employee(&payload)
        .await
        .map(ApiResponse::into_data)
        .map_err(|err| describe_error(&err, &CREATE_EMPLOYEE))?;
    log::info!("Created employee {}", created.employee_id);
    Ok(created)
}

pub async fn delete_employee(api: &ApiClient, employee_id: String) -> Result<(), String> {
    api.delete_employee(&employee_id)
        .await
        .map_err(|err| describe_error(&err, &DELETE_EMPLOYEE))?;
    log::info!("Deleted employee {}", employee_id);
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::utils::error_message::NETWORK_MESSAGE;
    use serde_json::json;

    fn employee_json(id: &str, name: &str) -> serde_json::Value {
        json!({
            "employee_id": id,
            "full_name": name,
            "email": format!("{}@example.com", id.to_lowercase()),
            "department": "Engineering"
        })
    }

    fn new_employee() -> NewEmployee {
        NewEmployee {
            employee_id: "EMP010".into(),
            full_name: "Nisha Pillai".into(),
            email: "nisha@example.com".into(),
            department: "HR".into(),
        }
    }

    #[tokio::test]
    async fn fetch_returns_empty_list() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/");
            then.status(200).json_body(json!([]));
        });

        let employees = fetch_employees(&server.client()).await.unwrap();
        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_is_humanized() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/");
            then.network_error();
        });

        let err = fetch_employees(&server.client()).await.unwrap_err();
        assert_eq!(err, NETWORK_MESSAGE);
    }

    #[tokio::test]
    async fn create_posts_payload_once() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/employees/");
            then.status(201).json_body(employee_json("EMP010", "Nisha Pillai"));
        });

        let created = create_employee(&server.client(), new_employee())
            .await
            .unwrap();

        assert_eq!(created.full_name, "Nisha Pillai");
        assert_eq!(server.hits(POST, "/api/employees/"), 1);
        assert_eq!(server.hits(GET, "/api/employees/"), 0);
        let request = server.last_request(POST, "/api/employees/").unwrap();
        assert_eq!(
            request.body,
            Some(json!({
                "employee_id": "EMP010",
                "full_name": "Nisha Pillai",
                "email": "nisha@example.com",
                "department": "HR"
            }))
        );
    }

    #[tokio::test]
    async fn rejected_create_returns_server_detail() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/employees/");
            then.status(400)
                .json_body(json!({ "detail": "Employee ID 'EMP010' already exists" }));
        });

        let err = create_employee(&server.client(), new_employee())
            .await
            .unwrap_err();
        assert_eq!(err, "Employee ID 'EMP010' already exists");
    }

    #[tokio::test]
    async fn delete_accepts_no_content() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/EMP001");
            then.status(204);
        });

        assert_eq!(delete_employee(&server.client(), "EMP001".into()).await, Ok(()));
        assert_eq!(server.hits(DELETE, "/api/employees/EMP001"), 1);
    }

    #[tokio::test]
    async fn failed_delete_returns_server_detail() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/EMP404");
            then.status(404)
                .json_body(json!({ "detail": "Employee with ID 'EMP404' not found" }));
        });

        let err = delete_employee(&server.client(), "EMP404".into())
            .await
            .unwrap_err();
        assert_eq!(err, "Employee with ID 'EMP404' not found");
    }
}
