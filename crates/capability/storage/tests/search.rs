//! 查找操作测试：大小写不敏感精确匹配、插入顺序、未命中即 None。

use domain::MotoStatus;
use patio_storage::{
    InMemoryKeyValueStore, KvLocalizacaoStore, KvMotoStore, KvPatioStore, KvSetorStore,
    LocalizacaoInput, LocalizacaoStore, MotoRecord, MotoStore, PatioRecord, PatioStore,
    SetorInput, SetorStore,
};
use std::sync::Arc;

fn moto(id: i64, placa: &str) -> MotoRecord {
    MotoRecord {
        id,
        nome: format!("Moto {id}"),
        fabricante: "Honda".to_string(),
        cilindrada: 160,
        placa: placa.to_string(),
        status: MotoStatus::Disponivel,
        qr_code: format!("QR-{id:04}"),
    }
}

#[tokio::test]
async fn find_by_placa_ignores_case() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let motos = KvMotoStore::new(kv);
    motos.save_moto(moto(1, "ABC123")).await.expect("save");

    let upper = motos.find_by_placa("ABC123").await.expect("find");
    let lower = motos.find_by_placa("abc123").await.expect("find");
    assert_eq!(upper, lower);
    assert_eq!(upper.expect("moto").id, 1);

    assert!(motos
        .find_by_placa("ZZZ999")
        .await
        .expect("find")
        .is_none());
}

#[tokio::test]
async fn find_by_placa_returns_first_in_insertion_order() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let motos = KvMotoStore::new(kv);
    motos.save_moto(moto(1, "ABC123")).await.expect("save");
    motos.save_moto(moto(2, "abc123")).await.expect("save");

    let found = motos
        .find_by_placa("ABC123")
        .await
        .expect("find")
        .expect("moto");
    assert_eq!(found.id, 1);
}

#[tokio::test]
async fn find_patio_by_nome_ignores_case() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let patios = KvPatioStore::new(kv);
    patios
        .save_patio(PatioRecord {
            id: 1,
            nome: "Pátio Norte".to_string(),
            localizacao: "Rua 1".to_string(),
        })
        .await
        .expect("save");

    let found = patios
        .find_by_nome("pátio norte")
        .await
        .expect("find")
        .expect("patio");
    assert_eq!(found.id, 1);
    assert!(patios.find_by_nome("Pátio Sul").await.expect("find").is_none());
}

#[tokio::test]
async fn find_setores_by_patio_nome_returns_all_matches_in_order() {
    let kv: Arc<InMemoryKeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
    let patios = KvPatioStore::new(kv.clone());
    let setores = KvSetorStore::new(kv);

    patios
        .save_patio(PatioRecord {
            id: 1,
            nome: "Pátio Norte".to_string(),
            localizacao: "Rua 1".to_string(),
        })
        .await
        .expect("save");
    patios
        .save_patio(PatioRecord {
            id: 2,
            nome: "Pátio Sul".to_string(),
            localizacao: "Rua 2".to_string(),
        })
        .await
        .expect("save");

    for (id, patio_id) in [(10, 1), (11, 2), (12, 1)] {
        setores
            .save_setor(SetorInput {
                id,
                nome: format!("S{id}"),
                fileira: 1,
                vaga: 1,
                patio_id,
            })
            .await
            .expect("save setor");
    }

    let do_norte = setores
        .find_by_patio_nome("PÁTIO NORTE")
        .await
        .expect("find");
    let ids: Vec<i64> = do_norte.iter().map(|setor| setor.id).collect();
    assert_eq!(ids, vec![10, 12]);

    assert!(setores
        .find_by_patio_nome("Pátio Leste")
        .await
        .expect("find")
        .is_empty());
}

#[tokio::test]
async fn find_localizacao_by_placa_matches_embedded_moto() {
    let kv: Arc<InMemoryKeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
    let motos = KvMotoStore::new(kv.clone());
    let patios = KvPatioStore::new(kv.clone());
    let setores = KvSetorStore::new(kv.clone());
    let localizacoes = KvLocalizacaoStore::new(kv);

    motos.save_moto(moto(1, "XYZ999")).await.expect("moto");
    patios
        .save_patio(PatioRecord {
            id: 2,
            nome: "Pátio Norte".to_string(),
            localizacao: "Rua 1".to_string(),
        })
        .await
        .expect("patio");
    setores
        .save_setor(SetorInput {
            id: 3,
            nome: "A1".to_string(),
            fileira: 1,
            vaga: 5,
            patio_id: 2,
        })
        .await
        .expect("setor");
    localizacoes
        .save_localizacao(LocalizacaoInput {
            id: 100,
            moto_id: 1,
            setor_id: 3,
        })
        .await
        .expect("localizacao");

    let found = localizacoes
        .find_by_placa("xyz999")
        .await
        .expect("find")
        .expect("localizacao");
    assert_eq!(found.id, 100);
    assert!(localizacoes
        .find_by_placa("AAA000")
        .await
        .expect("find")
        .is_none());
}
