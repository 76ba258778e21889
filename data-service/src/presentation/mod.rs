pub mod availability_dto;
pub mod demand_dto;
pub mod rule_dto;
pub mod schedule_dto;
pub mod transfer_dto;

pub use availability_dto::AvailabilityResponse;
pub use demand_dto::{DefaultTemplateEntryResponse, DemandDayResponse, DemandSaveResponse};
pub use rule_dto::{EventRuleResponse, SpecialDayResponse};
pub use schedule_dto::{GenerateScheduleResponse, ScheduleShiftResponse, ScheduleSummaryResponse, ShiftMetaResponse};
pub use transfer_dto::TransferRequestResponse;
