//! 追踪与请求 ID 生成。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 基础指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub collection_reads: u64,
    pub write_success: u64,
    pub write_failure: u64,
    pub delete_success: u64,
    pub constraint_rejections: u64,
    pub searches: u64,
}

/// 基础指标。
pub struct TelemetryMetrics {
    collection_reads: AtomicU64,
    write_success: AtomicU64,
    write_failure: AtomicU64,
    delete_success: AtomicU64,
    constraint_rejections: AtomicU64,
    searches: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            collection_reads: AtomicU64::new(0),
            write_success: AtomicU64::new(0),
            write_failure: AtomicU64::new(0),
            delete_success: AtomicU64::new(0),
            constraint_rejections: AtomicU64::new(0),
            searches: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            collection_reads: self.collection_reads.load(Ordering::Relaxed),
            write_success: self.write_success.load(Ordering::Relaxed),
            write_failure: self.write_failure.load(Ordering::Relaxed),
            delete_success: self.delete_success.load(Ordering::Relaxed),
            constraint_rejections: self.constraint_rejections.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录集合读取次数（list/查找都会读整个集合）。
pub fn record_collection_read() {
    metrics().collection_reads.fetch_add(1, Ordering::Relaxed);
}

/// 记录写入成功次数。
pub fn record_write_success() {
    metrics().write_success.fetch_add(1, Ordering::Relaxed);
}

/// 记录写入失败次数。
pub fn record_write_failure() {
    metrics().write_failure.fetch_add(1, Ordering::Relaxed);
}

/// 记录删除成功次数。
pub fn record_delete_success() {
    metrics().delete_success.fetch_add(1, Ordering::Relaxed);
}

/// 记录被引用完整性拒绝的操作次数。
pub fn record_constraint_rejection() {
    metrics().constraint_rejections.fetch_add(1, Ordering::Relaxed);
}

/// 记录查找操作次数。
pub fn record_search() {
    metrics().searches.fetch_add(1, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let before = metrics().snapshot();
        record_write_success();
        record_write_success();
        record_constraint_rejection();
        let after = metrics().snapshot();
        assert!(after.write_success >= before.write_success + 2);
        assert!(after.constraint_rejections >= before.constraint_rejections + 1);
    }

    #[test]
    fn request_ids_are_unique() {
        let first = new_request_ids();
        let second = new_request_ids();
        assert_ne!(first.request_id, second.request_id);
        assert_ne!(first.trace_id, second.trace_id);
    }
}
