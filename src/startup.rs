use axum::Router;
use figment::Figment;
use std::sync::Arc;
use tracing::info;

use crate::config::ServiceConfig;
use crate::db::VisitStore;
use crate::error::StartupError;
use crate::router::{AppState, visit_router};

/// Validate configuration, build the store once, and wire the router.
///
/// Configuration is checked before `factory` runs; on error the factory is
/// never called and no router is produced.
pub async fn build<F>(figment: &Figment, factory: F) -> Result<Router, StartupError>
where
    F: FnOnce(&ServiceConfig) -> Arc<dyn VisitStore>,
{
    let service = ServiceConfig::from_figment(figment)?;
    build_with_config(&service, factory).await
}

/// Same as [`build`] for an already validated config.
pub async fn build_with_config<F>(
    service: &ServiceConfig,
    factory: F,
) -> Result<Router, StartupError>
where
    F: FnOnce(&ServiceConfig) -> Arc<dyn VisitStore>,
{
    info!(
        client = service.client.as_str(),
        user = %service.connection.user,
        database = %service.connection.database,
        "constructing visit store"
    );
    let store = factory(service);
    store.ensure_schema().await?;
    Ok(visit_router(AppState::new(store)))
}
