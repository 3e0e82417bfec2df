//! 输入验证辅助函数
//!
//! 提供统一的输入验证函数：
//! - normalize_required：验证必填字段，去除空格并检查非空
//! - parse_status：解析状态字面量
//!
//! 验证规则：
//! - 去除首尾空格
//! - 非空字符串才通过验证
//! - 失败返回 bad_request_error 响应

use crate::utils::response::bad_request_error;
use axum::response::Response;
use domain::MotoStatus;

/// 验证必填字段，去除空格并检查非空。
pub fn normalize_required(value: String, field: &str) -> Result<String, Response> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(bad_request_error(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

/// 解析状态字面量（"Disponível" | "Em uso" | "Reparo"）。
pub fn parse_status(value: &str) -> Result<MotoStatus, Response> {
    MotoStatus::parse(value)
        .ok_or_else(|| bad_request_error(format!("unknown status '{value}'")))
}
