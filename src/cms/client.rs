use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::cms::models::{
    HeroVideo, HeroVideoComplete, ItemResponse, ListResponse, MaintenanceRecord, Subscription,
};
use crate::config;
use crate::maintenance::service::StatusFetch;

#[derive(Debug, Clone, PartialEq)]
pub enum CmsError {
    Network(String),
    Status(u16),
    Parse(String),
}

impl std::fmt::Display for CmsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CmsError::Network(msg) => write!(f, "network error: {}", msg),
            CmsError::Status(code) => write!(f, "unexpected status: {}", code),
            CmsError::Parse(msg) => write!(f, "malformed payload: {}", msg),
        }
    }
}

#[derive(Deserialize)]
struct AuthPayload {
    access_token: String,
}

/// Thin client for the headless CMS. Content records live under
/// `/items/{collection}`, files under `/assets/{file_id}`.
#[derive(Clone, Debug, PartialEq)]
pub struct CmsClient {
    base_url: String,
}

impl CmsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        CmsClient {
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        CmsClient::new(config::get_cms_url())
    }

    async fn get_item<T: DeserializeOwned>(&self, collection: &str) -> Result<T, CmsError> {
        let url = format!("{}/items/{}", self.base_url, collection);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| CmsError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(CmsError::Status(response.status()));
        }

        response
            .json::<ItemResponse<T>>()
            .await
            .map(|wrapped| wrapped.data)
            .map_err(|e| CmsError::Parse(e.to_string()))
    }

    pub async fn hero_video(&self) -> Result<HeroVideo, CmsError> {
        self.get_item("hero_video").await
    }

    /// Hero video record with video and poster file IDs resolved to URLs.
    pub async fn hero_video_complete(&self) -> Result<HeroVideoComplete, CmsError> {
        let video = self.hero_video().await?;
        let video_url = self.asset_url(&video.video_file);
        let poster_url = self.asset_url(&video.poster_image);
        Ok(HeroVideoComplete {
            video,
            video_url,
            poster_url,
        })
    }

    pub fn asset_url(&self, file_id: &str) -> String {
        format!("{}/assets/{}", self.base_url, file_id)
    }

    /// Asset URL with transform parameters (resizing etc.) appended as a
    /// query string.
    pub fn asset_url_with_transform(&self, file_id: &str, params: &[(&str, &str)]) -> String {
        let base = self.asset_url(file_id);
        if params.is_empty() {
            return base;
        }
        let query = params
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", base, query)
    }

    /// Exchange credentials for an access token. Token storage is the
    /// caller's concern.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, CmsError> {
        let response = Request::post(&format!("{}/auth/login", self.base_url))
            .header("Content-Type", "application/json")
            .json(&json!({ "email": email, "password": password }))
            .map_err(|e| CmsError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| CmsError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(CmsError::Status(response.status()));
        }

        response
            .json::<ItemResponse<AuthPayload>>()
            .await
            .map(|wrapped| wrapped.data.access_token)
            .map_err(|e| CmsError::Parse(e.to_string()))
    }

    pub async fn subscriptions(&self, token: &str) -> Result<Vec<Subscription>, CmsError> {
        let url = format!("{}/items/subscriptions", self.base_url);
        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| CmsError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(CmsError::Status(response.status()));
        }

        response
            .json::<ListResponse<Subscription>>()
            .await
            .map(|wrapped| wrapped.data)
            .map_err(|e| CmsError::Parse(e.to_string()))
    }
}

impl StatusFetch for CmsClient {
    async fn fetch_status(&self) -> Result<MaintenanceRecord, CmsError> {
        self.get_item("maintenance_mode").await
    }
}
