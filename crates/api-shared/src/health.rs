use crate::dto::HealthRes;

/// Simple health service shared by the REST API and the CLI.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Reports the service as healthy.
    ///
    /// The check-in service keeps no external connections, so being able to answer is the
    /// whole check.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Telecare is alive".into(),
        }
    }
}
