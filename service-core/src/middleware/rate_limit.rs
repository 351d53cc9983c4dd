use crate::error::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::{Clock, DefaultClock},
    state::keyed::DashMapStateStore,
    Quota, RateLimiter,
};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc, time::Duration};

/// Rate limiter keyed by client IP address.
pub type IpRateLimiter =
    Arc<RateLimiter<SocketAddr, DashMapStateStore<SocketAddr>, DefaultClock>>;

/// Create a keyed rate limiter (by IP)
pub fn create_ip_rate_limiter(attempts: u32, window_seconds: u64) -> IpRateLimiter {
    let attempts = attempts.max(1);
    let period = Duration::from_millis((window_seconds * 1000) / attempts as u64);
    let quota = Quota::with_period(period)
        .expect("Failed to create quota with valid period")
        .allow_burst(NonZeroU32::new(attempts).expect("attempts is guaranteed to be non-zero"));

    Arc::new(RateLimiter::dashmap(quota))
}

/// A per-client-IP ceiling together with the human-readable description that
/// names it in 429 responses (e.g. "10 per minute").
#[derive(Clone)]
pub struct RouteRateLimit {
    limiter: IpRateLimiter,
    description: Arc<str>,
}

impl RouteRateLimit {
    pub fn new(requests: u32, window_seconds: u64, description: impl Into<String>) -> Self {
        Self {
            limiter: create_ip_rate_limiter(requests, window_seconds),
            description: Arc::from(description.into()),
        }
    }

    pub fn per_minute(requests: u32) -> Self {
        Self::new(requests, 60, format!("{} per minute", requests))
    }

    pub fn per_hour(requests: u32) -> Self {
        Self::new(requests, 3600, format!("{} per hour", requests))
    }

    pub fn per_day(requests: u32) -> Self {
        Self::new(requests, 86400, format!("{} per day", requests))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Record one request from `addr`, returning the wait time on rejection.
    pub fn check(&self, addr: &SocketAddr) -> Result<(), Duration> {
        self.limiter
            .check_key(addr)
            .map_err(|negative| negative.wait_time_from(DefaultClock::default().now()))
    }
}

/// Resolve the client address: first x-forwarded-for entry when present,
/// otherwise the socket peer address.
fn client_addr(request: &Request) -> Option<SocketAddr> {
    let forwarded_ip = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .and_then(|s| s.trim().parse::<std::net::IpAddr>().ok());

    if let Some(ip) = forwarded_ip {
        Some(SocketAddr::new(ip, 0))
    } else {
        request
            .extensions()
            .get::<axum::extract::ConnectInfo<SocketAddr>>()
            .map(|axum::extract::ConnectInfo(addr)| *addr)
    }
}

/// Middleware enforcing one per-IP ceiling before the handler runs.
pub async fn ip_rate_limit_middleware(
    State(limit): State<RouteRateLimit>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match client_addr(&request) {
        Some(addr) => match limit.check(&addr) {
            Ok(_) => Ok(next.run(request).await),
            Err(wait_time) => Err(AppError::TooManyRequests(
                limit.description().to_string(),
                Some(wait_time.as_secs()),
            )),
        },
        None => {
            tracing::warn!("Could not determine client IP for rate limiting");
            Ok(next.run(request).await)
        }
    }
}
