pub mod availability_handlers;
pub mod default_template_handlers;
pub mod demand_handlers;
pub mod health_handlers;
pub mod rule_handlers;
pub mod schedule_handlers;
pub mod transfer_handlers;
