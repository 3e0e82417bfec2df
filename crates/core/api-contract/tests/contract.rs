use api_contract::{
    CreateMotoRequest, CreateSetorRequest, LocalizacaoDto, MotoDto, PatioDto, SetorDto,
};
use serde_json::Value;

fn moto_dto() -> MotoDto {
    MotoDto {
        id: 1,
        nome: "CG 160".to_string(),
        fabricante: "Honda".to_string(),
        cilindrada: 160,
        placa: "ABC1D23".to_string(),
        status: "Disponível".to_string(),
        qr_code: "QR-0001".to_string(),
    }
}

fn setor_dto() -> SetorDto {
    SetorDto {
        id: 2,
        nome: "A1".to_string(),
        fileira: 1,
        vaga: 5,
        patio: PatioDto {
            id: 3,
            nome: "Pátio Norte".to_string(),
            localizacao: "Rua 1".to_string(),
        },
    }
}

#[test]
fn moto_dto_is_camel_case() {
    let value = serde_json::to_value(moto_dto()).expect("serialize");
    assert!(value.get("qrCode").is_some());
    assert!(value.get("qr_code").is_none());
    assert_eq!(value["status"], "Disponível");
}

#[test]
fn create_moto_request_accepts_camel_case() {
    let payload = r#"{
        "nome": "CG 160",
        "fabricante": "Honda",
        "cilindrada": 160,
        "placa": "ABC1D23",
        "qrCode": "QR-0001"
    }"#;
    let req: CreateMotoRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.qr_code, "QR-0001");
    assert!(req.status.is_none());
}

#[test]
fn create_setor_request_accepts_camel_case() {
    let payload = r#"{"nome": "A1", "fileira": 1, "vaga": 5, "patioId": 3}"#;
    let req: CreateSetorRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.patio_id, 3);
}

#[test]
fn localizacao_dto_is_camel_case_with_snapshots() {
    let dto = LocalizacaoDto {
        id: 100,
        data_atualizada: "2025-01-01T12:00:00+00:00".to_string(),
        moto: moto_dto(),
        setor: setor_dto(),
    };
    let value: Value = serde_json::to_value(dto).expect("serialize");
    assert!(value.get("dataAtualizada").is_some());
    assert!(value.get("data_atualizada").is_none());
    assert_eq!(value["moto"]["placa"], "ABC1D23");
    assert_eq!(value["setor"]["patio"]["nome"], "Pátio Norte");
}
