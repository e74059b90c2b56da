use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header::CONTENT_TYPE, Client, Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    api::types::{detail_from_body, ApiError, ApiResponse},
    config::AppConfig,
};

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.config.api_base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .timeout(self.config.request_timeout)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        let (label, response) = self.execute(builder).await?;
        let status = response.status().as_u16();
        match response.json::<T>().await {
            Ok(data) => Ok(ApiResponse { data, status }),
            Err(err) => {
                let error = ApiError::decode(format!("Failed to parse response: {}", err));
                log_failure(&label, &error);
                Err(error)
            }
        }
    }

    pub(crate) async fn send_empty(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<()>, ApiError> {
        let (_, response) = self.execute(builder).await?;
        Ok(ApiResponse {
            data: (),
            status: response.status().as_u16(),
        })
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<(String, Response), ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::network(format!("Invalid request: {}", e)))?;
        let label = format!("{} {}", request.method(), request.url());

        let response = match self.dispatch(request).await {
            Ok(response) => response,
            Err(error) => {
                log_failure(&label, &error);
                return Err(error);
            }
        };

        let status = response.status();
        if status.is_success() {
            log::info!("API success: {} -> {}", label, status.as_u16());
            return Ok((label, response));
        }

        let body = response.text().await.unwrap_or_default();
        let error = ApiError::http(status.as_u16(), detail_from_body(&body));
        log_failure(&label, &error);
        Err(error)
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
        self.client
            .execute(request)
            .await
            .map_err(|err| self.classify_transport_error(err))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
        if let Some(responder) = mock_hooks::find_responder(request.url().as_str()) {
            return responder
                .respond(&request)
                .map(mock_hooks::MockResponse::into_response);
        }
        self.client
            .execute(request)
            .await
            .map_err(|err| self.classify_transport_error(err))
    }

    fn classify_transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::timeout(format!(
                "timeout of {}ms exceeded",
                self.config.request_timeout.as_millis()
            ))
        } else {
            ApiError::network(format!("Network Error: {}", err))
        }
    }
}

pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

fn log_failure(label: &str, error: &ApiError) {
    log::error!(
        "API error: {} code={} status={:?} detail={:?} message={}",
        label,
        error.code(),
        error.status,
        error.detail,
        error.message
    );
}
