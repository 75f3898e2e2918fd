use actix_web::web;

pub mod auth_pages;
pub mod health;
pub mod pages;
pub mod tools;

/// Configure application routes.
///
/// All JSON endpoints live under `/api`, which the request gate bypasses;
/// cookie verification for them happens in the extractors instead.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Page view models: /api/pages/**
    cfg.service(web::scope("/api/pages").configure(pages::configure_routes));

    // Auth passthroughs: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth_pages::configure_routes));

    // Tools: /api/tools/**
    cfg.service(web::scope("/api/tools").configure(tools::configure_routes));
}
