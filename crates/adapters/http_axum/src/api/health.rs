//! Liveness endpoint shared by every service.

use axum::Json;
use axum::routing::{MethodRouter, get};

use mockservices_domain::service::{HealthStatus, ServiceKind};

/// `GET /health` for `service`, usable on any router state.
pub fn route<S>(service: ServiceKind) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    get(move || async move { Json(HealthStatus::healthy(service)) })
}
