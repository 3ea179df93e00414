//! HTTP client for end-to-end tests
//!
//! Wraps reqwest and provides one method per library endpoint.
//! When API routes or request formats change, update only this file.

#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn get_dashboard(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Dashboard request failed")
    }

    /// GET /api/songs
    pub async fn get_songs(&self) -> Response {
        self.client
            .get(format!("{}/api/songs", self.base_url))
            .send()
            .await
            .expect("Get songs request failed")
    }

    /// GET /api/songs/{id}
    pub async fn get_song(&self, id: u64) -> Response {
        self.client
            .get(format!("{}/api/songs/{}", self.base_url, id))
            .send()
            .await
            .expect("Get song request failed")
    }

    /// GET /api/stats
    pub async fn get_stats(&self) -> Response {
        self.client
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .await
            .expect("Get stats request failed")
    }

    /// GET /api/summary
    pub async fn get_summary(&self) -> Response {
        self.client
            .get(format!("{}/api/summary", self.base_url))
            .send()
            .await
            .expect("Get summary request failed")
    }

    /// POST /api/play
    pub async fn play(&self, song_id: u64) -> Response {
        self.client
            .post(format!("{}/api/play", self.base_url))
            .json(&json!({ "songId": song_id }))
            .send()
            .await
            .expect("Play request failed")
    }

    /// POST /api/play with an arbitrary body
    pub async fn play_raw(&self, body: &'static str) -> Response {
        self.client
            .post(format!("{}/api/play", self.base_url))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Play request failed")
    }
}
