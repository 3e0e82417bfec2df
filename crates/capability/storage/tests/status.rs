//! 状态字段的定向更新测试（出入场登记路径）。

use domain::MotoStatus;
use patio_storage::{InMemoryKeyValueStore, KvMotoStore, MotoRecord, MotoStore};
use std::sync::Arc;

fn moto(id: i64) -> MotoRecord {
    MotoRecord {
        id,
        nome: "CG 160".to_string(),
        fabricante: "Honda".to_string(),
        cilindrada: 160,
        placa: format!("ABC{id:04}"),
        status: MotoStatus::Disponivel,
        qr_code: format!("QR-{id:04}"),
    }
}

#[tokio::test]
async fn set_status_updates_single_field() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let motos = KvMotoStore::new(kv);
    motos.save_moto(moto(1)).await.expect("save");
    motos.save_moto(moto(2)).await.expect("save");

    let updated = motos
        .set_status(1, MotoStatus::EmUso)
        .await
        .expect("set")
        .expect("moto");
    assert_eq!(updated.status, MotoStatus::EmUso);
    assert_eq!(updated.nome, "CG 160");

    // 其他记录不受影响
    let other = motos.find_moto(2).await.expect("find").expect("moto");
    assert_eq!(other.status, MotoStatus::Disponivel);

    // 出场：回到 Disponível
    let updated = motos
        .set_status(1, MotoStatus::Disponivel)
        .await
        .expect("set")
        .expect("moto");
    assert_eq!(updated.status, MotoStatus::Disponivel);
}

#[tokio::test]
async fn set_status_unknown_id_is_none() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let motos = KvMotoStore::new(kv);
    let result = motos.set_status(42, MotoStatus::EmUso).await.expect("set");
    assert!(result.is_none());
}

#[tokio::test]
async fn full_edit_may_write_any_status() {
    // 数据层不强制状态迁移表：整体编辑可以写入任意状态
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let motos = KvMotoStore::new(kv);
    motos.save_moto(moto(1)).await.expect("save");

    let mut edited = moto(1);
    edited.status = MotoStatus::Reparo;
    motos.save_moto(edited).await.expect("edit");

    let found = motos.find_moto(1).await.expect("find").expect("moto");
    assert_eq!(found.status, MotoStatus::Reparo);
}
