pub mod availability_service;
pub mod canonicalizer;
pub mod day_index_service;
pub mod default_template_service;
pub mod demand_service;
pub mod notification_service;
pub mod rule_engine;
pub mod schedule_service;
pub mod transfer_service;

pub use availability_service::AvailabilityService;
pub use day_index_service::DayIndexService;
pub use default_template_service::DefaultTemplateService;
pub use demand_service::DemandService;
pub use notification_service::{LoggingNotificationDispatcher, NotificationDispatcher};
pub use rule_engine::RuleEngine;
pub use schedule_service::ScheduleService;
pub use transfer_service::TransferService;
