//! Shared wire types for the content backend API

use serde::{Deserialize, Serialize};
use crate::utils::errors::{HubDeskError, Result};

/// Response envelope every backend endpoint wraps its payload in
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning a `success: false` envelope into an error
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(HubDeskError::Rejected(
                self.message.unwrap_or_else(|| "Request was rejected by the server".to_string()),
            ));
        }

        self.data.ok_or_else(|| {
            HubDeskError::Rejected("Server reported success but returned no data".to_string())
        })
    }

    /// Check the success flag, ignoring any payload (delete/reorder responses)
    pub fn into_ok(self) -> Result<()> {
        if !self.success {
            return Err(HubDeskError::Rejected(
                self.message.unwrap_or_else(|| "Request was rejected by the server".to_string()),
            ));
        }
        Ok(())
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Paginated<T> {
    /// Total number of pages at this page size
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        ((self.total + self.limit as u64 - 1) / self.limit as u64) as u32
    }
}

/// One entry of a reorder submission: record id plus its new position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    pub order: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_rejection_carries_message() {
        let response: ApiResponse<u32> = ApiResponse {
            success: false,
            message: Some("No such record".to_string()),
            data: None,
        };
        let err = response.into_data().unwrap_err();
        assert_eq!(err.display_text(), "No such record");
    }

    #[test]
    fn test_envelope_success_without_data_is_rejected() {
        let response: ApiResponse<u32> = ApiResponse {
            success: true,
            message: None,
            data: None,
        };
        assert!(response.into_data().is_err());
    }

    #[test]
    fn test_total_pages() {
        let page = Paginated::<u32> { items: vec![], total: 41, page: 1, limit: 10 };
        assert_eq!(page.total_pages(), 5);
        let exact = Paginated::<u32> { items: vec![], total: 40, page: 1, limit: 10 };
        assert_eq!(exact.total_pages(), 4);
    }
}
