//! 键值端口之上的集合存储实现
//!
//! 每个实体一个实现文件，全部基于 `Repository<T>`，共享同一个
//! 注入的 `Arc<dyn KeyValueStore>`：
//! - KvMotoStore
//! - KvPatioStore（删除前检查依赖区位）
//! - KvSetorStore（保存时解析并内嵌停车场快照）
//! - KvLocalizacaoStore（保存时解析并内嵌 moto/setor 快照）

pub mod localizacao;
pub mod moto;
pub mod patio;
pub mod setor;

pub use localizacao::KvLocalizacaoStore;
pub use moto::KvMotoStore;
pub use patio::KvPatioStore;
pub use setor::KvSetorStore;

/// 四个集合在键值后端中的键名。
pub const MOTOS_KEY: &str = "motos";
pub const PATIOS_KEY: &str = "patios";
pub const SETORES_KEY: &str = "setores";
pub const LOCALIZACOES_KEY: &str = "localizacoes";
