//! Application state shared across API handlers

use std::sync::Arc;

use chrono::{DateTime, Utc};
use satlend_core::AppConfig;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Most recent BTC/USD tick from the external price feed
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTick {
    /// BTC price in USD
    pub btc_usd: f64,
    /// When the tick was received
    pub updated_at: DateTime<Utc>,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RwLock<AppConfig>,
    price: RwLock<Option<PriceTick>>,
}

impl AppState {
    /// Create a new application state with default config
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create with a specific config
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config: RwLock::new(config),
                price: RwLock::new(None),
            }),
        }
    }

    /// Get current config
    pub async fn config(&self) -> AppConfig {
        self.inner.config.read().await.clone()
    }

    /// Latest price tick, if the feed has delivered one
    pub async fn price(&self) -> Option<PriceTick> {
        *self.inner.price.read().await
    }

    /// Record a new price tick from the external feed.
    ///
    /// Non-positive prices are dropped: a bad tick must not poison LTV
    /// classification for every dashboard poll that follows.
    pub async fn set_price(&self, btc_usd: f64, at: DateTime<Utc>) -> bool {
        if btc_usd <= 0.0 {
            tracing::warn!(btc_usd, "rejecting non-positive price tick");
            return false;
        }
        let mut price = self.inner.price.write().await;
        *price = Some(PriceTick {
            btc_usd,
            updated_at: at,
        });
        true
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
