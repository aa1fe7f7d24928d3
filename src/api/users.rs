//! User administration API client

use crate::models::common::Paginated;
use crate::models::user::{User, AdminLevel, UpdateAdminStatusRequest};
use crate::utils::errors::Result;
use super::http::HttpClient;

#[derive(Clone)]
pub struct UserApi {
    http: HttpClient,
}

impl UserApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch one page of the user list
    pub async fn list(&self, page: u32, limit: u32) -> Result<Paginated<User>> {
        let path = format!("/api/v1/getAllUsersPaginated?page={}&limit={}", page, limit);
        self.http.get_json::<Paginated<User>>(&path).await?.into_data()
    }

    /// Full-text user search, paginated
    pub async fn search(&self, query: &str, page: u32, limit: u32) -> Result<Paginated<User>> {
        let path = format!(
            "/api/v1/searchUsers?search={}&page={}&limit={}",
            urlencoding::encode(query),
            page,
            limit
        );
        self.http.get_json::<Paginated<User>>(&path).await?.into_data()
    }

    /// Change a user's admin level
    pub async fn update_admin_status(&self, id: &str, admin: AdminLevel) -> Result<User> {
        let request = UpdateAdminStatusRequest {
            id: id.to_string(),
            admin,
        };
        self.http
            .post_json::<_, User>("/api/v1/updateAdminStatus", &request)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "User", id))
    }
}
