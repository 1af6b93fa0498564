// src/http_api/cors.rs

// 📦 External crates
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

// 🧠 Internal modules
use crate::config::{AllowedOrigins, CorsConfig};

/// Builds the cross-origin layer for `config`.
///
/// Browsers reject a literal `*` alongside credentials, so with credentials
/// on the wildcard is served by echoing the request's origin, method and
/// headers back.
#[must_use]
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_credentials(config.allow_credentials);

    if config.allow_credentials {
        let origin = match &config.allowed_origins {
            AllowedOrigins::Any => AllowOrigin::mirror_request(),
            AllowedOrigins::List(origins) => AllowOrigin::list(origins.clone()),
        };
        layer
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    } else {
        let origin = match &config.allowed_origins {
            AllowedOrigins::Any => AllowOrigin::any(),
            AllowedOrigins::List(origins) => AllowOrigin::list(origins.clone()),
        };
        layer
            .allow_origin(origin)
            .allow_methods(AllowMethods::any())
            .allow_headers(AllowHeaders::any())
    }
}
