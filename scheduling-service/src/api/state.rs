use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::infrastructure::config::Settings;

/// Bounds concurrent `/solve` calls so the process never runs more MILP solves at once
/// than `solver.max_concurrent_solves` — each solve is CPU-bound and runs on a blocking
/// thread, so unbounded concurrency would starve the async runtime.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub solve_permits: Arc<Semaphore>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let permits = settings.solver.max_concurrent_solves.max(1);
        Self {
            settings: Arc::new(settings),
            solve_permits: Arc::new(Semaphore::new(permits)),
        }
    }
}
