//! Liveness and database connectivity check.

use std::time::Instant;

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::model::health::{HealthDto, HealthServicesDto};

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
    started_at: Instant,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection, started_at: Instant) -> Self {
        Self { db, started_at }
    }

    /// Pings the database with `SELECT 1`. A failed ping degrades the status
    /// instead of failing the request.
    pub async fn check(&self) -> HealthDto {
        let ping_started = Instant::now();
        let connected = match self.db.execute_unprepared("SELECT 1").await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("Health check database ping failed: {}", err);
                false
            }
        };

        HealthDto {
            status: if connected { "ok" } else { "degraded" }.to_string(),
            timestamp: Utc::now(),
            uptime_seconds: self.started_at.elapsed().as_secs(),
            response_time_ms: ping_started.elapsed().as_millis() as u64,
            services: HealthServicesDto {
                database: if connected {
                    "connected"
                } else {
                    "disconnected"
                }
                .to_string(),
            },
        }
    }
}
