//! Per-IP rate limiting using a token bucket.

use std::sync::Arc;

use axum::Router;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Requests per second refilled into each client's bucket.
const RATE_PER_SECOND: u64 = 2;
/// Burst allowance per client.
const BURST_SIZE: u32 = 100;

/// Wraps the router with a per-client-IP rate limiter.
///
/// With `behind_proxy` the client IP is read from `X-Forwarded-For` /
/// `X-Real-IP`; enable only behind a trusted reverse proxy. Otherwise the
/// peer socket address is used, which requires the server to be built
/// with connect info.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn apply(router: Router, behind_proxy: bool) -> Router {
    if behind_proxy {
        let conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(RATE_PER_SECOND)
                .burst_size(BURST_SIZE)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("invalid rate limiter configuration"),
        );
        router.layer(GovernorLayer::new(conf))
    } else {
        let conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(RATE_PER_SECOND)
                .burst_size(BURST_SIZE)
                .key_extractor(PeerIpKeyExtractor)
                .finish()
                .expect("invalid rate limiter configuration"),
        );
        router.layer(GovernorLayer::new(conf))
    }
}
