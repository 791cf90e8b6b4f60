//! One-time setup code for creating the first admin account.
//!
//! When the database has no ADMIN user, startup generates a code, logs it, and keeps it in
//! memory for a short time. `POST /api/auth/setup` redeems it exactly once. The code is
//! never persisted, so restarting the server invalidates it.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default lifetime of a setup code.
const SETUP_CODE_TTL: Duration = Duration::from_secs(60);

/// Characters used for codes. Omits 0/O and 1/I/L so a code read off a terminal
/// can be typed back without guessing.
const CHARSET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
const GROUPS: usize = 4;
const GROUP_LEN: usize = 4;

#[derive(Clone)]
struct SetupCode {
    code: String,
    expires_at: Instant,
}

impl SetupCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory holder for the current setup code.
///
/// Cloning shares the same slot, so the copy in `AppState` and the one used at startup
/// see the same code.
#[derive(Clone)]
pub struct SetupCodeService {
    code: Arc<RwLock<Option<SetupCode>>>,
    ttl: Duration,
}

impl SetupCodeService {
    /// Creates a service with no active code and the default 60 second lifetime.
    pub fn new() -> Self {
        Self::with_ttl(SETUP_CODE_TTL)
    }

    /// Creates a service whose codes live for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - Code formatted as four dash-separated groups, e.g. `K7QM-2XHD-9PZR-TW4N`
    pub async fn generate(&self) -> String {
        let code = Self::random_code();
        *self.code.write().await = Some(SetupCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
        });
        code
    }

    /// Checks `input` against the stored code and consumes it on success.
    ///
    /// Expired codes are cleared and fail. A wrong code leaves the stored code in place.
    ///
    /// # Returns
    /// - `true` - Code matched and has been consumed
    /// - `false` - No code, expired, or mismatch
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut code = self.code.write().await;

        let Some(stored) = code.as_ref() else {
            return false;
        };

        if stored.is_expired() {
            *code = None;
            return false;
        }

        if stored.code == input.trim().to_ascii_uppercase() {
            *code = None;
            return true;
        }

        false
    }

    fn random_code() -> String {
        let mut rng = rand::rng();

        (0..GROUPS)
            .map(|_| {
                (0..GROUP_LEN)
                    .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("-")
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}
