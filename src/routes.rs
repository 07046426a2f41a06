use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

use crate::{
    api::{admin, attendance, schedule},
    auth::handlers,
    config::Config,
    store::Store,
};

/// Wires the route table for a backend. The generic parameter picks the
/// store at composition time: `MySqlStore` in `main`, `MemoryStore` in the
/// test harness.
pub fn configure<S: Store>(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .wrap(build_limiter(config.rate_login_per_min))
                    .route(web::post().to(handlers::login::<S>)),
            )
            .service(
                web::resource("/logout")
                    .wrap(build_limiter(config.rate_login_per_min))
                    .route(web::post().to(handlers::logout)),
            ),
    );

    // Session-protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(build_limiter(config.rate_protected_per_min))
            .service(
                // /schedule
                web::resource("/schedule")
                    .route(web::get().to(schedule::list_schedule::<S>))
                    .route(web::post().to(schedule::add_schedule::<S>)),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(
                        web::resource("")
                            .route(web::post().to(attendance::record_attendance::<S>))
                            .route(web::get().to(attendance::list_own_attendance::<S>)),
                    )
                    // /attendance/filter?date=YYYY-MM-DD
                    .service(
                        web::resource("/filter")
                            .route(web::get().to(attendance::filter_attendance::<S>)),
                    )
                    // /attendance/export
                    .service(
                        web::resource("/export")
                            .route(web::get().to(attendance::export_attendance)),
                    ),
            )
            .service(web::resource("/monitor").route(web::get().to(admin::monitor)))
            .service(web::resource("/backup").route(web::get().to(admin::backup_info))),
    );
}
