//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

const EMPLOYEES_PATH: &str = "api/Employees";

/// HTTP client for making network requests to the roster server
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
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request (no response body expected)
    async fn delete_no_content(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response.text().await?));
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    fn status_error(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Server(text),
        }
    }

    // ========== Employee API ==========

    /// List all employees
    pub async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.get(EMPLOYEES_PATH).await
    }

    /// Get a single employee by id
    pub async fn get_employee(&self, id: i64) -> ClientResult<Employee> {
        self.get(&format!("{EMPLOYEES_PATH}/{id}")).await
    }

    /// Create an employee; the server assigns the id
    pub async fn create(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        self.post(EMPLOYEES_PATH, payload).await
    }

    /// Replace an employee's editable fields
    pub async fn update(&self, id: i64, payload: &EmployeeUpdate) -> ClientResult<Employee> {
        self.put(&format!("{EMPLOYEES_PATH}/{id}"), payload).await
    }

    /// Delete an employee permanently
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.delete_no_content(&format!("{EMPLOYEES_PATH}/{id}")).await
    }
}
