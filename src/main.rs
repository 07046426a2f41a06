use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use rollcall::auth::session::SessionManager;
use rollcall::config::Config;
use rollcall::db::init_db;
use rollcall::routes;
use rollcall::store::MySqlStore;

#[get("/")]
async fn index() -> impl Responder {
    "Attendance service"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url).await;
    let store = Data::new(MySqlStore::new(pool));

    // One session map shared by every worker; sessions would otherwise be
    // invisible across threads.
    let sessions = Data::new(SessionManager::new());

    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(store.clone())
            .app_data(sessions.clone())
            .service(index)
            .configure(|cfg| routes::configure::<MySqlStore>(cfg, config.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
