use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// 实体 ID 生成接口。
///
/// 所有集合的记录 ID 都是进程内唯一的 64 位整数。
/// 通过注入接口生成，禁止各调用点自行取时间戳。
pub trait IdProvider: Send + Sync {
    /// 分配下一个 ID。
    fn next_id(&self) -> i64;
}

/// 单调递增的 ID 生成器。
///
/// 以当前毫秒时间戳作为种子，此后每次分配原子递增。
/// ID 仍保持 64 位且大致按时间排序，但同一毫秒内的两次
/// 分配不会再产生相同的 ID。
pub struct SequentialIdProvider {
    next: AtomicI64,
}

impl SequentialIdProvider {
    /// 以当前时间（毫秒）为种子创建生成器。
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(1);
        Self::starting_at(seed)
    }

    /// 以显式种子创建生成器（测试用）。
    pub fn starting_at(seed: i64) -> Self {
        Self {
            next: AtomicI64::new(seed),
        }
    }
}

impl Default for SequentialIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdProvider, SequentialIdProvider};

    #[test]
    fn ids_are_distinct_and_increasing() {
        let ids = SequentialIdProvider::starting_at(100);
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();
        assert_eq!(first, 100);
        assert_eq!(second, 101);
        assert_eq!(third, 102);
    }
}
