//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .service(
                    web::resource("")
                        .app_data(json_config("Invalid post data"))
                        .route(web::post().to(posts::create_post))
                        .route(web::get().to(posts::list_posts)),
                )
                .service(
                    web::resource("/comments")
                        .app_data(json_config("err parsing json"))
                        .route(web::post().to(comments::create_comment)),
                )
                .route("/{post_id}/comments", web::get().to(comments::list_post_comments))
                .route("/{post_id}/publish", web::post().to(posts::publish_post)),
        );
}

/// JSON extractor settings: undecodable bodies become a 400 error body
/// whose message starts with `prefix`.
fn json_config(prefix: &'static str) -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(move |err, _req| AppError::Decode(format!("{prefix}: {err}")).into())
}
