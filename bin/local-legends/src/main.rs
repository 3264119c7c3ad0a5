//! # LocalLegends Binary
//!
//! The entry point that assembles the application based on compile-time
//! features and runtime configuration, then reports what it loaded.

use std::sync::Arc;

use ll_configs::{AppConfig, LogConfig};
use ll_core::filter::{request_filters, ServiceFilter};
use ll_core::traits::{ForumRepo, Geolocation, RequestRepo, Telephony};
use ll_services::App;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(not(feature = "store-memory"))]
compile_error!("local-legends needs a store backend; enable the `store-memory` feature");
#[cfg(not(feature = "device-console"))]
compile_error!("local-legends needs device adapters; enable the `device-console` feature");

// Feature-gated imports
#[cfg(feature = "store-memory")]
use ll_store_memory::{InMemoryForumStore, InMemoryRequestStore};

#[cfg(feature = "device-console")]
use ll_device_console::{ConsoleTelephony, FixedGeolocation};

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Startup check only; forms ask for a fresh fix when they need one.
async fn has_gps_fix(geolocation: &dyn Geolocation) -> bool {
    match geolocation.current_position().await {
        Ok(point) => {
            info!(?point, "GPS fix available");
            true
        }
        Err(e) => {
            warn!(error = %e, "no GPS fix; location forms will rely on typed addresses");
            false
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.log);
    info!("Starting LocalLegends v{}", env!("CARGO_PKG_VERSION"));
    info!(?config, "Loaded configuration");

    // 1. Stores
    #[cfg(feature = "store-memory")]
    let (request_repo, forum_repo): (Arc<dyn RequestRepo>, Arc<dyn ForumRepo>) = (
        Arc::new(InMemoryRequestStore::new()),
        Arc::new(InMemoryForumStore::with_policy(config.forum.answer_policy)),
    );

    // 2. Device capabilities
    #[cfg(feature = "device-console")]
    let (telephony, geolocation): (Arc<dyn Telephony>, Arc<dyn Geolocation>) = (
        Arc::new(ConsoleTelephony),
        Arc::new(FixedGeolocation::new(config.device.position())),
    );

    if config.seed.demo_data {
        ll_services::seed_demo_data(request_repo.as_ref(), forum_repo.as_ref(), &config.admin.id);
    }

    has_gps_fix(geolocation.as_ref()).await;

    // 3. Services
    let app = App::new(request_repo, forum_repo, telephony, geolocation)
        .with_title_max_len(config.forum.title_max_len);

    for label in request_filters() {
        let count = app.requests.dashboard(&ServiceFilter::from(label.as_str())).len();
        if count > 0 {
            info!(filter = %label, count, "dashboard");
        }
    }
    for post in app.forum.posts() {
        info!(post_id = %post.id, status = ?post.status, title = %post.title, "forum");
    }

    info!(answer_policy = ?config.forum.answer_policy, "LocalLegends ready");
    Ok(())
}
