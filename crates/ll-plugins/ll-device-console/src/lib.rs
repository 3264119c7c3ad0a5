//! # ll-device-console
//!
//! Headless implementations of the device ports. Links are written to the
//! log instead of being handed to a dialer, and the position is a fixed
//! point from configuration.

use async_trait::async_trait;
use ll_core::models::GeoPoint;
use ll_core::traits::{Geolocation, Telephony};
use tracing::info;

const SUPPORTED_SCHEMES: [&str; 2] = ["tel:", "whatsapp:"];

/// Logs every link it is asked to open.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleTelephony;

#[async_trait]
impl Telephony for ConsoleTelephony {
    async fn can_open(&self, url: &str) -> bool {
        SUPPORTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
    }

    async fn open(&self, url: &str) -> anyhow::Result<()> {
        if !self.can_open(url).await {
            anyhow::bail!("no handler for {url}");
        }
        info!(url, "opening contact link");
        Ok(())
    }
}

/// Always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocation {
    position: GeoPoint,
}

impl FixedGeolocation {
    pub fn new(position: GeoPoint) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocation for FixedGeolocation {
    async fn current_position(&self) -> anyhow::Result<GeoPoint> {
        Ok(self.position)
    }
}
