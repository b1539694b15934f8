//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{CreatedResponse, Employee, EmployeeCreate, EmployeeUpdate, ErrorBody, MessageResponse};

use crate::{ClientConfig, ClientError, ClientResult, EmployeeService};

const EMPLOYEES_PATH: &str = "api/employees";

/// HTTP client for making requests to the staff API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    message: body.message,
                    error: body.error,
                });
            }
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl EmployeeService for HttpClient {
    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get(EMPLOYEES_PATH).await
    }

    async fn create_employee(&self, employee: &EmployeeCreate) -> ClientResult<CreatedResponse> {
        self.post(EMPLOYEES_PATH, employee).await
    }

    async fn update_employee(
        &self,
        id: &str,
        employee: &EmployeeUpdate,
    ) -> ClientResult<MessageResponse> {
        self.put(&format!("{EMPLOYEES_PATH}/{id}"), employee).await
    }

    async fn delete_employee(&self, id: &str) -> ClientResult<MessageResponse> {
        self.delete(&format!("{EMPLOYEES_PATH}/{id}")).await
    }
}
