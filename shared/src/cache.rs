use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};

pub type RedisPool = ConnectionManager;

/// Create a Redis connection pool
pub async fn create_redis_pool(redis_url: &str) -> Result<RedisPool, RedisError> {
    let client = Client::open(redis_url)?;
    ConnectionManager::new(client).await
}

/// Cache key constants for demand/schedule lookups
pub mod cache_keys {
    use uuid::Uuid;

    /// Cache key for a persisted or lazily-generated day schedule.
    pub fn day_schedule(tenant_id: Uuid, date: &str, location: &str) -> String {
        format!("schedule:day:{}:{}:{}", tenant_id, date, location)
    }

    /// Pattern matching all day-schedule cache keys for a tenant.
    pub fn day_schedule_pattern(tenant_id: Uuid) -> String {
        format!("schedule:day:{}:*", tenant_id)
    }

    /// Cache key for a solver invocation result, keyed by the demand's content hash
    /// plus the availability snapshot hash (so stale availability never serves a cached solve).
    pub fn solve_result(content_hash: &str, availability_hash: &str) -> String {
        format!("solve:result:{}:{}", content_hash, availability_hash)
    }

}

/// Cache TTL constants (in seconds)
pub mod cache_ttl {
    /// TTL for a persisted day-schedule lookup (5 minutes; invalidated eagerly on mutation).
    pub const DAY_SCHEDULE: u64 = 300;

    /// TTL for a cached solve result (1 hour).
    pub const SOLVE_RESULT: u64 = 3600;
}

/// Invalidate a specific cache key
pub async fn invalidate_cache(redis_conn: &mut ConnectionManager, key: &str) {
    let _: Result<(), _> = redis_conn.del(key).await;
}

/// Invalidate multiple cache keys by pattern
pub async fn invalidate_cache_pattern(redis_conn: &mut ConnectionManager, pattern: &str) {
    let keys: Result<Vec<String>, _> = redis_conn.keys(pattern).await;
    if let Ok(keys) = keys {
        if !keys.is_empty() {
            let _: Result<(), _> = redis::cmd("DEL").arg(&keys).query_async(redis_conn).await;
        }
    }
}

/// Get a cached value
pub async fn get_cached<T: serde::de::DeserializeOwned>(
    redis_conn: &mut ConnectionManager,
    key: &str,
) -> Option<T> {
    let cached: Result<String, _> = redis_conn.get(key).await;
    if let Ok(cached_data) = cached {
        serde_json::from_str(&cached_data).ok()
    } else {
        None
    }
}

/// Set a cached value with TTL
pub async fn set_cached<T: serde::Serialize>(
    redis_conn: &mut ConnectionManager,
    key: &str,
    value: &T,
    ttl_seconds: u64,
) {
    if let Ok(json) = serde_json::to_string(value) {
        let _: Result<(), _> = redis_conn.set_ex(key, json, ttl_seconds).await;
    }
}
