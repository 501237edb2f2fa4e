use reqwest::StatusCode;
use serde_json::Value;

use crate::config::Config;

/// Fetches decorative Lottie descriptors. Every failure degrades to `None`.
#[derive(Clone)]
pub struct AnimationService {
    http: reqwest::Client,
    banner_url: String,
    celebration_url: String,
}

impl AnimationService {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            banner_url: config.banner_animation_url.clone(),
            celebration_url: config.celebration_animation_url.clone(),
        }
    }

    pub async fn banner(&self) -> Option<Value> {
        self.fetch(&self.banner_url).await
    }

    pub async fn celebration(&self) -> Option<Value> {
        self.fetch(&self.celebration_url).await
    }

    pub async fn fetch(&self, url: &str) -> Option<Value> {
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Animation fetch from {} failed: {}", url, e);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            log::warn!(
                "Animation fetch from {} returned status {}",
                url,
                response.status()
            );
            return None;
        }

        match response.json::<Value>().await {
            Ok(animation) => Some(animation),
            Err(e) => {
                log::warn!("Animation from {} is not valid JSON: {}", url, e);
                None
            }
        }
    }
}
