//! Stock inventory API client

use crate::models::stock::{Stock, CreateStockRequest, UpdateStockRequest};
use crate::utils::errors::Result;
use super::http::HttpClient;

#[derive(Clone)]
pub struct StockApi {
    http: HttpClient,
}

impl StockApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Stock>> {
        self.http.get_json::<Vec<Stock>>("/api/v1/stock").await?.into_data()
    }

    pub async fn create(&self, request: &CreateStockRequest) -> Result<Stock> {
        self.http
            .post_json::<_, Stock>("/api/v1/stock", request)
            .await?
            .into_data()
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/api/v1/stock/{}", id);
        self.http
            .delete_json::<serde_json::Value>(&path)
            .await?
            .into_ok()
            .map_err(|e| super::map_not_found(e, "Stock item", id))
    }

    /// Set a stock item's count
    pub async fn update_count(&self, id: &str, count: i64) -> Result<Stock> {
        let request = UpdateStockRequest {
            id: id.to_string(),
            count,
        };
        self.http
            .post_json::<_, Stock>("/api/v1/update-stock", &request)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "Stock item", id))
    }
}
