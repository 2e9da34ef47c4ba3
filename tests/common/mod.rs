//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_store;

use larder::config::StoreConfig;
use larder::store::{Ingredient, StoreClient};

/// Store settings pointed at a mock server, with short timeouts.
pub fn store_config(base_url: &str) -> StoreConfig {
    StoreConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn make_client(base_url: &str) -> StoreClient {
    StoreClient::new(&store_config(base_url)).expect("client should build")
}

pub fn ingredient(id: &str, title: &str, amount: f64) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        title: title.to_string(),
        amount,
    }
}
