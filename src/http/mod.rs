//! HTTP adapter: routes, extractor configuration and the response envelope.

pub mod error;
pub mod handlers;
pub mod response;

use actix_web::web;
use tracing::debug;

use error::ApiError;
pub use handlers::*;

/// Register every user endpoint together with extractor error handlers that
/// keep rejections in the standard envelope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json = web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "Rejected request body");
        ApiError::invalid_payload().into()
    });
    let query = web::QueryConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "Rejected query string");
        ApiError::invalid_query().into()
    });

    cfg.app_data(json)
        .app_data(query)
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
