pub mod availability;
pub mod day_demand_index;
pub mod default_demand;
pub mod demand;
pub mod event_rule;
pub mod schedule_shift;
pub mod shift_transfer_request;
pub mod special_day;

pub use availability::{AssignedShiftRef, Availability, AvailabilitySlot};
pub use day_demand_index::DayDemandIndex;
pub use default_demand::DefaultDemand;
pub use demand::Demand;
pub use event_rule::EventRule;
pub use schedule_shift::{shift_uid, ScheduleShift, ShiftMeta};
pub use shift_transfer_request::ShiftTransferRequest;
pub use special_day::SpecialDay;
