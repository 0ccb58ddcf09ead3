pub mod headers;
pub mod rate_limit;

pub use headers::{restrict_hosts, security_headers};
pub use rate_limit::{rate_limit, RateLimiter};
