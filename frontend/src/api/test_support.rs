#[cfg(test)]
pub mod mock {
    use crate::api::client::mock_hooks::{register_mock, MockResponse, TestResponder};
    use crate::api::{ApiClient, ApiError};
    use crate::config::AppConfig;
    use reqwest::{header::HeaderMap, Method, Request};
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const DELETE: Method = Method::DELETE;

    /// In-process stand-in for the HR backend. Routes match on method and path; the
    /// most recently registered route wins.
    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        requests: Vec<RecordedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        outcome: Outcome,
    }

    #[derive(Clone)]
    enum Outcome {
        Respond(MockResponse),
        Fail(ApiError),
    }

    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub query: Option<String>,
        pub body: Option<Value>,
        pub headers: HeaderMap,
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    requests: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn base_url(&self) -> String {
            register_mock(self.base.clone(), Arc::new(self.clone()));
            self.base.clone()
        }

        pub fn client(&self) -> ApiClient {
            ApiClient::new(AppConfig::new(self.base_url()))
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let outcome = match then.failure.take() {
                Some(error) => Outcome::Fail(error),
                None => {
                    let status = then.status.unwrap_or(200);
                    match then.body.take() {
                        Some(body) => Outcome::Respond(MockResponse::json(status, body)),
                        None => Outcome::Respond(MockResponse::empty(status)),
                    }
                }
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                outcome,
            });
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("mock lock").requests.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.requests()
                .iter()
                .filter(|request| request.method == method && request.path == path)
                .count()
        }

        pub fn last_request(&self, method: Method, path: &str) -> Option<RecordedRequest> {
            self.requests()
                .into_iter()
                .rev()
                .find(|request| request.method == method && request.path == path)
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &Request) -> Result<MockResponse, ApiError> {
            let method = request.method().clone();
            let path = request.url().path().to_string();
            let body = request
                .body()
                .and_then(|body| body.as_bytes())
                .and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok());

            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::network("mock lock"))?;
            inner.requests.push(RecordedRequest {
                method: method.clone(),
                path: path.clone(),
                query: request.url().query().map(str::to_string),
                body,
                headers: request.headers().clone(),
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == method && route.path == path)
                .cloned();

            match route.map(|route| route.outcome) {
                Some(Outcome::Respond(response)) => Ok(response),
                Some(Outcome::Fail(error)) => Err(error),
                None => Ok(MockResponse::json(
                    404,
                    serde_json::json!({ "detail": "Not Found" }),
                )),
            }
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        failure: Option<ApiError>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        /// Simulates the request timing out before any response arrives.
        pub fn timeout(&mut self) -> &mut Self {
            self.failure = Some(ApiError::timeout("timeout of 10000ms exceeded"));
            self
        }

        /// Simulates a connection that never reaches the backend.
        pub fn network_error(&mut self) -> &mut Self {
            self.failure = Some(ApiError::network("Network Error"));
            self
        }
    }
}
