pub mod availability_repository;
pub mod day_demand_index_repository;
pub mod default_demand_repository;
pub mod demand_repository;
pub mod event_rule_repository;
pub mod schedule_shift_repository;
pub mod special_day_repository;
pub mod transfer_repository;

pub use availability_repository::{AvailabilityRepository, UpsertAvailability};
pub use day_demand_index_repository::DayDemandIndexRepository;
pub use default_demand_repository::DefaultDemandRepository;
pub use demand_repository::{DemandRepository, UpsertDemand};
pub use event_rule_repository::{CreateEventRule, EventRuleRepository};
pub use schedule_shift_repository::{
    NewScheduleShift, PatchScheduleShift, ScheduleShiftRepository,
};
pub use special_day_repository::{SpecialDayRepository, UpsertSpecialDay};
pub use transfer_repository::{CreateTransferRequest, TransferRepository};
