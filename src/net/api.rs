//! Backend contracts for role and page data.
//!
//! The layout and the views only see the source traits; `ApiClient` is the
//! HTTP implementation talking to the career backend.

use std::time::Duration;

use serde::Serialize;

use super::fetch::{FetchError, JsonClient};
use crate::model::{IndustryProfile, Metrics, Page, PageSet, RoleSet, SkillSuggestions};

/// Body of the industry and skill lookups for the user's current role.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoleQuery {
    pub role: String,
}

/// Body of a role map request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapRolesRequest {
    pub current_role: String,
    pub metrics: Option<Metrics>,
}

/// Body of a role detail request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RolePagesRequest {
    pub role_name: String,
    pub current_role: String,
    pub metrics: Option<Metrics>,
    pub user_skills: Vec<String>,
}

/// Classifies the user's current role and suggests skills for it.
pub trait ProfileSource {
    fn infer_industry(&self, query: &RoleQuery) -> Result<IndustryProfile, FetchError>;
    fn suggest_skills(&self, query: &RoleQuery) -> Result<Vec<String>, FetchError>;
}

/// Supplies the candidate roles shown on the map.
pub trait RoleSource {
    fn map_roles(&self, request: &MapRolesRequest) -> Result<RoleSet, FetchError>;
}

/// Supplies the ordered detail pages for one role.
pub trait PageSource {
    fn role_pages(&self, request: &RolePagesRequest) -> Result<Vec<Page>, FetchError>;
}

/// HTTP client for the career backend.
#[derive(Clone)]
pub struct ApiClient {
    http: JsonClient,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            http: JsonClient::new(base_url, timeout)?,
        })
    }
}

impl ProfileSource for ApiClient {
    fn infer_industry(&self, query: &RoleQuery) -> Result<IndustryProfile, FetchError> {
        self.http.post_json(&["infer-industry"], query)
    }

    fn suggest_skills(&self, query: &RoleQuery) -> Result<Vec<String>, FetchError> {
        let set: SkillSuggestions = self.http.post_json(&["suggest-skills"], query)?;
        Ok(set.skills)
    }
}

impl RoleSource for ApiClient {
    fn map_roles(&self, request: &MapRolesRequest) -> Result<RoleSet, FetchError> {
        self.http.post_json(&["map", "roles"], request)
    }
}

impl PageSource for ApiClient {
    fn role_pages(&self, request: &RolePagesRequest) -> Result<Vec<Page>, FetchError> {
        let set: PageSet = self
            .http
            .post_json(&["role", request.role_name.as_str(), "pages"], request)?;
        Ok(set.pages)
    }
}

impl<T: ProfileSource + ?Sized> ProfileSource for &T {
    fn infer_industry(&self, query: &RoleQuery) -> Result<IndustryProfile, FetchError> {
        (**self).infer_industry(query)
    }

    fn suggest_skills(&self, query: &RoleQuery) -> Result<Vec<String>, FetchError> {
        (**self).suggest_skills(query)
    }
}

impl<T: RoleSource + ?Sized> RoleSource for &T {
    fn map_roles(&self, request: &MapRolesRequest) -> Result<RoleSet, FetchError> {
        (**self).map_roles(request)
    }
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn role_pages(&self, request: &RolePagesRequest) -> Result<Vec<Page>, FetchError> {
        (**self).role_pages(request)
    }
}
