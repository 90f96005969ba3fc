//! Cross-origin policy applied uniformly to all routes.
//!
//! The service is probed by browser frontends served from other origins with
//! `withCredentials` requests, so every response carries CORS headers
//! permitting credentialed cross-origin access.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the CORS stage layered onto the router.
///
/// Browsers reject `Access-Control-Allow-Origin: *` on credentialed requests,
/// so the request origin is mirrored back instead; methods and headers are
/// mirrored the same way so preflights always succeed.
///
/// Reflecting arbitrary origins while allowing credentials disables the
/// browser's same-origin protections. Deployments that serve anything beyond
/// a liveness status should restrict the origin list here.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
