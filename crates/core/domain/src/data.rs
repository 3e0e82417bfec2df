use serde::{Deserialize, Serialize};

/// 摩托车状态。
///
/// 序列化为三个字面量之一（与存量数据的写法一致）：
/// `"Disponível"` | `"Em uso"` | `"Reparo"`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotoStatus {
    /// 可用（新建记录的默认状态）
    #[default]
    #[serde(rename = "Disponível")]
    Disponivel,
    /// 使用中
    #[serde(rename = "Em uso")]
    EmUso,
    /// 维修中
    #[serde(rename = "Reparo")]
    Reparo,
}

impl MotoStatus {
    /// 返回线上格式的字面量。
    pub fn as_str(&self) -> &'static str {
        match self {
            MotoStatus::Disponivel => "Disponível",
            MotoStatus::EmUso => "Em uso",
            MotoStatus::Reparo => "Reparo",
        }
    }

    /// 从字面量解析状态；未知字面量返回 None。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Disponível" => Some(MotoStatus::Disponivel),
            "Em uso" => Some(MotoStatus::EmUso),
            "Reparo" => Some(MotoStatus::Reparo),
            _ => None,
        }
    }
}

impl std::fmt::Display for MotoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::MotoStatus;

    #[test]
    fn status_roundtrip_literals() {
        for (status, literal) in [
            (MotoStatus::Disponivel, "\"Disponível\""),
            (MotoStatus::EmUso, "\"Em uso\""),
            (MotoStatus::Reparo, "\"Reparo\""),
        ] {
            let json = serde_json::to_string(&status).expect("serialize");
            assert_eq!(json, literal);
            let parsed: MotoStatus = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn default_is_disponivel() {
        assert_eq!(MotoStatus::default(), MotoStatus::Disponivel);
        assert_eq!(MotoStatus::parse("Em uso"), Some(MotoStatus::EmUso));
        assert_eq!(MotoStatus::parse("em uso"), None);
    }
}
