mod config;
mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let port = config.port;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if config.seed.enabled {
        let today = time::OffsetDateTime::now_utc().date();
        match services::seed::run_seed(&pool, &config.seed, today).await {
            Ok(report) => tracing::info!(
                admin_created = report.admin_created,
                events_created = report.events_created,
                "seed complete"
            ),
            Err(e) => tracing::error!(error = %e, "seed failed"),
        }
    }

    match services::session::purge_expired_sessions(&pool).await {
        Ok(removed) if removed > 0 => tracing::info!(removed, "expired sessions purged"),
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "session purge failed"),
    }

    let state = state::AppState::new(pool, config);

    // Leptos SSR is optional: without its config the JSON API still serves.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "concert journal listening");
    axum::serve(listener, app).await.expect("server failed");
}
