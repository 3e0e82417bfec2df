//! 存储层错误类型
//!
//! 统一的存储错误枚举，区分以下情况：
//! - 后端 I/O 故障（get/set 失败）
//! - 负载损坏（键存在但无法反序列化，区别于键缺失）
//! - 输入校验失败（必填字段为空）
//! - 引用完整性：悬空引用、被依赖阻止的删除、缺失选择
//!
//! 查询未命中不是错误：查找操作返回 `Ok(None)` 或空集合。

/// 存储与引用完整性错误。
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// 键值后端 get/set 的 I/O 故障。操作立即失败，不重试，
    /// 不提交任何部分状态。
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// 集合负载存在但反序列化失败。致命错误，绝不回退为空集合
    /// （空集合仅对应键缺失）。
    #[error("corrupt payload in collection '{collection}': {detail}")]
    Corrupt { collection: String, detail: String },

    /// 必填字段为空。
    #[error("{field} required")]
    Validation { field: &'static str },

    /// 保存引用了当前集合中不存在的父记录。
    #[error("{entity} {id} does not exist")]
    DanglingReference { entity: &'static str, id: i64 },

    /// 删除被依赖记录阻止（不级联）。携带依赖数量供提示。
    #[error("patio {id} has {dependentes} setor(es) attached")]
    ReferentialConstraintViolation { id: i64, dependentes: usize },

    /// 定位记录保存时 moto 或 setor 选择缺失/无法解析。
    #[error("{entity} {id} not selected or unknown")]
    MissingSelection { entity: &'static str, id: i64 },
}
