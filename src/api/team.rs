//! Team member API client

use crate::models::team::{TeamMember, CreateTeamMemberRequest, UpdateTeamMemberRequest};
use crate::utils::errors::Result;
use super::http::HttpClient;

#[derive(Clone)]
pub struct TeamApi {
    http: HttpClient,
}

impl TeamApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<TeamMember>> {
        self.http
            .get_json::<Vec<TeamMember>>("/api/v1/team")
            .await?
            .into_data()
    }

    pub async fn create(&self, request: &CreateTeamMemberRequest) -> Result<TeamMember> {
        self.http
            .post_json::<_, TeamMember>("/api/v1/team", request)
            .await?
            .into_data()
    }

    pub async fn update(&self, id: &str, request: &UpdateTeamMemberRequest) -> Result<TeamMember> {
        let path = format!("/api/v1/team/{}", id);
        self.http
            .put_json::<_, TeamMember>(&path, request)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "Team member", id))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/api/v1/team/{}", id);
        self.http
            .delete_json::<serde_json::Value>(&path)
            .await?
            .into_ok()
            .map_err(|e| super::map_not_found(e, "Team member", id))
    }
}
