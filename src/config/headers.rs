//! HTTP header name constants.
//!
//! Header names used when walking redirect chains and when attributing a
//! redirect to the platform layer that configured it.

/// Location header (redirect target)
pub const HEADER_LOCATION: &str = "location";
/// Server header (identifies server software)
pub const HEADER_SERVER: &str = "server";
/// Via header (proxy chain information)
pub const HEADER_VIA: &str = "via";
/// X-Vercel-Id header (Vercel edge request ID)
pub const HEADER_X_VERCEL_ID: &str = "x-vercel-id";
/// CF-Ray header (Cloudflare request ID)
pub const HEADER_CF_RAY: &str = "cf-ray";
/// X-Amz-Cf-Id header (CloudFront request ID)
pub const HEADER_X_AMZ_CF_ID: &str = "x-amz-cf-id";
/// X-Served-By header (Fastly server identification)
pub const HEADER_X_SERVED_BY: &str = "x-served-by";

/// Headers inspected by the source-attribution heuristic.
///
/// Presence of an edge-platform marker in any of these headers attributes
/// the redirect to the platform edge rather than the origin server.
pub const ATTRIBUTION_HEADERS: &[&str] = &[
    HEADER_SERVER,
    HEADER_VIA,
    HEADER_X_VERCEL_ID,
    HEADER_CF_RAY,
    HEADER_X_AMZ_CF_ID,
    HEADER_X_SERVED_BY,
];

/// Accept header value sent with audit requests.
pub const ACCEPT_HEADER_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
