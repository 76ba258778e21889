pub mod cache;
pub mod canonical;
pub mod error;
pub mod pagination;
pub mod response;
pub mod solver;
pub mod time;
pub mod types;

// Re-export commonly used items
pub use cache::{
    cache_keys, cache_ttl, create_redis_pool, get_cached, invalidate_cache,
    invalidate_cache_pattern, set_cached, RedisPool,
};
pub use canonical::{
    canonicalize_day_item, canonicalize_day_items, canonicalize_template_items, content_hash,
    group_by_date_location, DemandItem, RawDemandItem, TemplateItem,
};
pub use error::{DomainError, DomainResult};
pub use pagination::{PaginatedResponse, PaginationParams};
pub use response::ApiResponse;
pub use solver::{
    AssignedEmployeeDetail, AssignedEmployeeSegment, AssignedShiftInput, AvailabilityInput,
    AvailabilitySlotInput, HoursSummaryEntry, MissingSegment, ShiftAssignmentOut, SolveRequest,
    SolveResponse, UncoveredEntry,
};
pub use types::{Identifiable, Role, RuleMode, Timestamped, TransferAction, TransferStatus};
