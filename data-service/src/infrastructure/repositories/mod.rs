pub mod postgres_availability_repository;
pub mod postgres_day_demand_index_repository;
pub mod postgres_default_demand_repository;
pub mod postgres_demand_repository;
pub mod postgres_event_rule_repository;
pub mod postgres_schedule_shift_repository;
pub mod postgres_special_day_repository;
pub mod postgres_transfer_repository;

pub use postgres_availability_repository::PostgresAvailabilityRepository;
pub use postgres_day_demand_index_repository::PostgresDayDemandIndexRepository;
pub use postgres_default_demand_repository::PostgresDefaultDemandRepository;
pub use postgres_demand_repository::PostgresDemandRepository;
pub use postgres_event_rule_repository::PostgresEventRuleRepository;
pub use postgres_schedule_shift_repository::PostgresScheduleShiftRepository;
pub use postgres_special_day_repository::PostgresSpecialDayRepository;
pub use postgres_transfer_repository::PostgresTransferRepository;
