//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Setup code service for first-admin bootstrap
//! - TTL cache for dashboard aggregates
//! - Upload directory for evidence files

use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc, time::Duration, time::Instant};

use super::service::{cache::TtlCache, setup_code::SetupCodeService};

/// Lifetime of cached dashboard responses.
const DASHBOARD_CACHE_TTL: Duration = Duration::from_secs(30);
/// Maximum number of cached dashboard responses.
const DASHBOARD_CACHE_CAPACITY: usize = 100;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `SetupCodeService` and `TtlCache` use `Arc` for shared state
/// - `Arc<PathBuf>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Holder of the one-time code that creates the first admin account.
    pub setup_code_service: SetupCodeService,

    /// Cached dashboard responses, serialized as JSON.
    pub dashboard_cache: TtlCache<serde_json::Value>,

    /// Directory evidence uploads are written to and served from.
    pub upload_dir: Arc<PathBuf>,

    /// Time the server started, used for health uptime.
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `setup_code_service` - Service holding the first-admin setup code
    /// - `upload_dir` - Directory for evidence files
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        setup_code_service: SetupCodeService,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            db,
            setup_code_service,
            dashboard_cache: TtlCache::new(DASHBOARD_CACHE_TTL, DASHBOARD_CACHE_CAPACITY),
            upload_dir: Arc::new(upload_dir),
            started_at: Instant::now(),
        }
    }
}
