//! # Pátio Storage 模块
//!
//! 本模块是整个系统的数据核心：四个去规范化的记录集合
//! （motos / patios / setores / localizacoes）以整集合 JSON 负载的
//! 形式持久化在键值后端中，并在应用层强制引用完整性。
//!
//! ## 架构设计
//!
//! 1. **键值端口** (`kv.rs`)：后端最小接口（get/set），显式注入
//! 2. **通用仓库** (`repository.rs`)：单集合的 load/save/upsert/delete
//! 3. **数据模型层** (`models.rs`)：记录结构与保存输入
//! 4. **错误处理层** (`error.rs`)：带标签的存储/完整性错误枚举
//! 5. **验证辅助层** (`validation.rs`)：必填校验与引用解析（纯函数）
//! 6. **接口抽象层** (`traits.rs`)：四个集合的异步 Trait 接口
//! 7. **实现层** (`stores/`)：基于仓库的集合存储实现
//!
//! ## 核心语义
//!
//! - **快照内嵌**：setor 内嵌所属 patio 的深拷贝，localizacao 内嵌
//!   moto 与 setor 的深拷贝。保存之后对源记录的编辑不会传播。
//!   这是有意的历史快照语义，不是待修复的缺陷。
//! - **删除策略非对称**：patio 删除被依赖区位阻止（携带数量），
//!   moto/setor 删除无依赖检查。该非对称是继承下来的产品语义。
//! - **整集合写入**：每次变更都是读-改-整体写，单键写入假定原子；
//!   无跨集合事务。
//! - **插入顺序**：集合永远保持追加顺序，所有查找都是 O(n) 线性
//!   扫描（单车队规模，无需索引）。
//!
//! ## 存储后端
//!
//! - [`InMemoryKeyValueStore`]：内存实现（测试与演示）
//! - [`RedisKeyValueStore`]：Redis 实现（生产环境）
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use patio_storage::{InMemoryKeyValueStore, KvPatioStore, PatioStore, PatioRecord};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let kv = Arc::new(InMemoryKeyValueStore::new());
//!     let patios = KvPatioStore::new(kv);
//!     patios
//!         .save_patio(PatioRecord {
//!             id: 1,
//!             nome: "Pátio Norte".to_string(),
//!             localizacao: "Rua 1".to_string(),
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod kv;
pub mod models;
pub mod redis;
pub mod repository;
pub mod stores;
pub mod traits;
pub mod validation;

pub use error::StorageError;
pub use kv::{InMemoryKeyValueStore, KeyValueStore};
pub use models::{
    LocalizacaoInput, LocalizacaoRecord, MotoRecord, PatioRecord, SetorInput, SetorRecord,
};
pub use redis::RedisKeyValueStore;
pub use repository::{Identified, Repository};
pub use stores::{
    KvLocalizacaoStore, KvMotoStore, KvPatioStore, KvSetorStore, LOCALIZACOES_KEY, MOTOS_KEY,
    PATIOS_KEY, SETORES_KEY,
};
pub use traits::{LocalizacaoStore, MotoStore, PatioStore, SetorStore};
pub use validation::*;
