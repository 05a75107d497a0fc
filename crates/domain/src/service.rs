//! Service identity and the fixed health payload.

use serde::Serialize;

/// Which of the three mock services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Calculator,
    Traffic,
    Weather,
}

impl ServiceKind {
    /// Lowercase service name as it appears on the wire.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Traffic => "traffic",
            Self::Weather => "weather",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Liveness payload returned by every `/health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: ServiceKind,
}

impl HealthStatus {
    /// The payload a running service always reports.
    #[must_use]
    pub fn healthy(service: ServiceKind) -> Self {
        Self {
            status: "healthy",
            service,
        }
    }
}
