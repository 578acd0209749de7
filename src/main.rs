use anyhow::Context;
use product_service::{
    app::product::ProductStore,
    config::{Config, StoreBackend},
    create_app,
    infrastructure::{database::DatabaseManager, logger::Logger, MemoryProductStore, PgProductStore},
    AppState, ProductService,
};
use std::{sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    // guard 必须存活到进程结束
    let _log_guard = Logger::init(&config.app).context("failed to initialize logging")?;

    info!("Starting {}...", config.app.name);

    let store: Arc<dyn ProductStore> = match config.store.backend {
        StoreBackend::Postgres => {
            let db = DatabaseManager::new(&config.app, &config.database).await.map_err(|e| {
                error!("Failed to initialize database: {}", e);
                e
            })?;
            Arc::new(PgProductStore::new(db.into_pool()))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory product store, data is lost on restart");
            Arc::new(MemoryProductStore::new())
        }
    };

    let state = AppState {
        product_service: ProductService::new(store),
    };
    let app = create_app(
        state,
        config.app.name.clone(),
        Duration::from_secs(config.app.request_timeout_seconds),
    );

    let listener = TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;
    info!("{} initiated at http://{}", config.app.name, listener.local_addr()?);
    info!("   POST   /services/add-product");
    info!("   GET    /services/list-product/:sort  (new | high | low | a-z | z-a)");
    info!("   GET    /health");
    info!("   GET    /metrics");

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                stop_rx.await.ok();
            })
            .await
    });

    shutdown_signal().await;
    info!("Shutdown {}", config.app.name);
    let _ = stop_tx.send(());

    let grace = Duration::from_secs(config.app.shutdown_grace_seconds);
    match tokio::time::timeout(grace, server).await {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(e))) => warn!("can't shutdown {}: {}", config.app.name, e),
        Ok(Err(e)) => warn!("server task failed: {}", e),
        Err(_) => warn!(
            "in-flight requests still running after {:?}, closing",
            grace
        ),
    }

    info!("{} exiting", config.app.name);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
