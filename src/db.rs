use sqlx::MySqlPool;

/// Connects the pool at startup. An unreachable or misconfigured database is
/// fatal here, before the server binds.
pub async fn init_db(database_url: &str) -> MySqlPool {
    MySqlPool::connect(database_url)
        .await
        .expect("Failed to connect to database")
}
