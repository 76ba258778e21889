use std::sync::Arc;

use crate::domain::repositories::{EventRuleRepository, SpecialDayRepository};
use crate::domain::services::{
    AvailabilityService, DefaultTemplateService, DemandService, ScheduleService, TransferService,
};
use crate::infrastructure::redis::RedisPool;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub availability_service: Arc<AvailabilityService>,
    pub demand_service: Arc<DemandService>,
    pub default_template_service: Arc<DefaultTemplateService>,
    pub schedule_service: Arc<ScheduleService>,
    pub transfer_service: Arc<TransferService>,
    pub rule_repo: Arc<dyn EventRuleRepository>,
    pub special_day_repo: Arc<dyn SpecialDayRepository>,
    pub redis_pool: RedisPool,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        availability_service: Arc<AvailabilityService>,
        demand_service: Arc<DemandService>,
        default_template_service: Arc<DefaultTemplateService>,
        schedule_service: Arc<ScheduleService>,
        transfer_service: Arc<TransferService>,
        rule_repo: Arc<dyn EventRuleRepository>,
        special_day_repo: Arc<dyn SpecialDayRepository>,
        redis_pool: RedisPool,
    ) -> Self {
        Self {
            availability_service,
            demand_service,
            default_template_service,
            schedule_service,
            transfer_service,
            rule_repo,
            special_day_repo,
            redis_pool,
        }
    }
}
