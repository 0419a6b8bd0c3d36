//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Token bucket parameters for [`layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Seconds between token refills.
    pub per_second: u64,
    /// Bucket size, i.e. the largest burst a client can send.
    pub burst_size: u32,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            per_second: 1,
            burst_size: 100,
        }
    }
}

/// Creates a per-IP rate limiter for link endpoints.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Panics
///
/// Panics if either value of `limit` is zero; configuration validation
/// rejects such values at startup.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/links", post(create_link_handler))
///     .layer(rate_limit::layer(RateLimit::default()));
/// ```
pub fn layer(
    limit: RateLimit,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(limit.per_second)
            .burst_size(limit.burst_size)
            .finish()
            .expect("rate limit values must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
