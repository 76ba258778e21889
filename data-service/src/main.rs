mod api;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::AppState;
use domain::repositories::{
    AvailabilityRepository, DayDemandIndexRepository, DefaultDemandRepository, DemandRepository,
    EventRuleRepository, ScheduleShiftRepository, SpecialDayRepository, TransferRepository,
};
use domain::services::{
    AvailabilityService, DayIndexService, DefaultTemplateService, DemandService,
    LoggingNotificationDispatcher, RuleEngine, ScheduleService, TransferService,
};
use infrastructure::{
    config::Settings,
    database, redis,
    repositories::{
        PostgresAvailabilityRepository, PostgresDayDemandIndexRepository,
        PostgresDefaultDemandRepository, PostgresDemandRepository, PostgresEventRuleRepository,
        PostgresScheduleShiftRepository, PostgresSpecialDayRepository, PostgresTransferRepository,
    },
    solver_client::ReqwestSolverClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "data_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Data Service...");

    let settings = Settings::new()?;
    tracing::info!("Configuration loaded: {:?}", settings);

    let db_pool =
        database::create_pool(&settings.database.url, settings.database.max_connections).await?;
    tracing::info!("Database connection pool created");

    database::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations completed");

    let redis_pool = redis::create_redis_pool(&settings.redis.url).await?;
    tracing::info!("Redis connection established");

    // Repositories
    let availability_repo: Arc<dyn AvailabilityRepository> =
        Arc::new(PostgresAvailabilityRepository::new(db_pool.clone()));
    let demand_repo: Arc<dyn DemandRepository> = Arc::new(PostgresDemandRepository::new(db_pool.clone()));
    let day_index_repo: Arc<dyn DayDemandIndexRepository> =
        Arc::new(PostgresDayDemandIndexRepository::new(db_pool.clone()));
    let default_demand_repo: Arc<dyn DefaultDemandRepository> =
        Arc::new(PostgresDefaultDemandRepository::new(db_pool.clone()));
    let default_demand_repo_for_demand_service = default_demand_repo.clone();
    let rule_repo: Arc<dyn EventRuleRepository> = Arc::new(PostgresEventRuleRepository::new(db_pool.clone()));
    let special_day_repo: Arc<dyn SpecialDayRepository> =
        Arc::new(PostgresSpecialDayRepository::new(db_pool.clone()));
    let shift_repo: Arc<dyn ScheduleShiftRepository> =
        Arc::new(PostgresScheduleShiftRepository::new(db_pool.clone()));
    let transfer_repo: Arc<dyn TransferRepository> = Arc::new(PostgresTransferRepository::new(db_pool.clone()));

    tracing::info!("Repositories initialized");

    // Services
    let availability_service = Arc::new(AvailabilityService::new(availability_repo));
    let day_index_service = Arc::new(DayIndexService::new(day_index_repo, demand_repo.clone()));
    let default_template_service = Arc::new(DefaultTemplateService::new(default_demand_repo));
    let demand_service = Arc::new(DemandService::new(
        demand_repo.clone(),
        default_demand_repo_for_demand_service,
        shift_repo.clone(),
        day_index_service.clone(),
    ));
    let rule_engine = Arc::new(RuleEngine::new(special_day_repo.clone()));
    let notifications = Arc::new(LoggingNotificationDispatcher);
    let solver_client = Arc::new(ReqwestSolverClient::new(settings.solver_client.base_url.clone()));
    let schedule_service = Arc::new(ScheduleService::new(
        demand_repo,
        shift_repo.clone(),
        availability_service.clone(),
        rule_engine,
        solver_client,
        day_index_service,
        notifications.clone(),
    ));
    let transfer_service = Arc::new(TransferService::new(transfer_repo, shift_repo, notifications));

    tracing::info!("Services initialized");

    let app_state = AppState::new(
        availability_service,
        demand_service,
        default_template_service,
        schedule_service,
        transfer_service,
        rule_repo,
        special_day_repo,
        redis_pool,
    );

    let app = api::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(settings.server_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Data Service listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
