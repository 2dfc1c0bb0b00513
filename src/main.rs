use anyhow::Result;
use quill_blog::application::services::ApplicationServices;
use quill_blog::config::AppConfig;
use quill_blog::domain::{
    author::AuthorRepository, page::PageReadRepository, post::PostReadRepository,
    taxonomy::TaxonomyRepository,
};
use quill_blog::infrastructure::{
    database,
    repositories::{
        PostgresAuthorRepository, PostgresPageReadRepository, PostgresPostReadRepository,
        PostgresTaxonomyRepository,
    },
};
use quill_blog::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{HttpState, SiteSettings},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let post_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let page_repo: Arc<dyn PageReadRepository> =
        Arc::new(PostgresPageReadRepository::new(pool.clone()));
    let author_repo: Arc<dyn AuthorRepository> =
        Arc::new(PostgresAuthorRepository::new(pool.clone()));
    let taxonomy_repo: Arc<dyn TaxonomyRepository> =
        Arc::new(PostgresTaxonomyRepository::new(pool));

    let services = Arc::new(ApplicationServices::new(
        post_repo,
        page_repo,
        author_repo,
        taxonomy_repo,
    ));

    let state = HttpState {
        services,
        site: Arc::new(SiteSettings {
            title: config.site_title().to_string(),
        }),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit());
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
