//! HTTP client for the remote ingredient store.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::config::StoreConfig;
use crate::store::error::StoreError;
use crate::store::types::{Ingredient, NewIngredient};

/// Response body of a create call: the store returns the generated id
/// under `name`.
#[derive(Debug, Deserialize)]
struct CreateResponse {
    name: String,
}

/// Typed client over the store endpoints.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Build a client from config. The base URL arrives here explicitly;
    /// nothing in this module reads the process environment.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|source| StoreError::Transport { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `POST {base}/ingredients.json` with `{title, amount}`.
    ///
    /// Returns the draft with the store-assigned id merged in.
    pub async fn create_ingredient(
        &self,
        draft: NewIngredient,
    ) -> Result<Ingredient, StoreError> {
        let url = format!("{}/ingredients.json", self.base_url);
        let response = self
            .client
            .post(url)
            .json(&draft)
            .send()
            .await
            .map_err(|source| StoreError::Transport { source })?;

        let response = check_status(response)?;
        let body: CreateResponse =
            response
                .json()
                .await
                .map_err(|source| StoreError::MalformedResponse {
                    detail: source.to_string(),
                })?;

        Ok(draft.with_id(body.name))
    }

    /// `DELETE {base}/ingredients/{id}.json`. Success needs no body.
    pub async fn delete_ingredient(&self, id: &str) -> Result<(), StoreError> {
        let url = format!("{}/ingredients/{}.json", self.base_url, id);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|source| StoreError::Transport { source })?;

        check_status(response)?;
        Ok(())
    }

    /// `GET {base}/ingredients.json`, optionally filtered on exact title.
    ///
    /// The store's filter syntax is `?orderBy="title"&equalTo="<text>"`,
    /// quotes included. An empty store answers JSON `null`; otherwise the
    /// body maps id to `{title, amount}`. Push ids sort chronologically,
    /// so collecting into a `BTreeMap` yields records in creation order.
    pub async fn fetch_ingredients(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<Ingredient>, StoreError> {
        let url = format!("{}/ingredients.json", self.base_url);
        let mut request = self.client.get(url);
        if let Some(filter) = filter {
            let quoted = format!("\"{filter}\"");
            request = request.query(&[("orderBy", "\"title\""), ("equalTo", quoted.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|source| StoreError::Transport { source })?;

        let response = check_status(response)?;
        let body: Option<BTreeMap<String, NewIngredient>> =
            response
                .json()
                .await
                .map_err(|source| StoreError::MalformedResponse {
                    detail: source.to_string(),
                })?;

        Ok(body
            .unwrap_or_default()
            .into_iter()
            .map(|(id, record)| record.with_id(id))
            .collect())
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status {
            status: status.as_u16(),
        })
    }
}
