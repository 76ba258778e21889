pub mod availability_request;
pub mod default_template_request;
pub mod demand_request;
pub mod rule_request;
pub mod schedule_request;
pub mod transfer_request;

pub use availability_request::{AssignedShiftRequest, AvailabilityDayRequest, SlotInput, SlotsInput, UpsertAvailabilityRequest};
pub use default_template_request::{
    BulkDefaultTemplateRequest, DefaultTemplateEntryRequest, UpsertDefaultTemplateRequest, WeekTemplateQuery,
};
pub use demand_request::{DemandRowRequest, GetDayQuery, SaveDayRequest, SaveRangeRequest};
pub use rule_request::{CreateEventRuleRequest, CreateSpecialDayRequest, ListSpecialDaysQuery};
pub use schedule_request::{ApproveShiftRequest, DaySchedulePathQuery, GenerateDayRequest, GenerateRangeRequest, PatchShiftRequest};
pub use transfer_request::{CreateTransferRequestBody, ModerateTransferRequest};
