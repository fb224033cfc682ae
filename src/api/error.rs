// ==========================================
// 制造业自动化投资仿真系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 将领域/配置错误转换为带显式原因的错误
// ==========================================

use crate::config::ConfigError;
use crate::domain::error::DomainError;
use crate::domain::types::AutomationCategory;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 调用方契约错误
    // ==========================================
    #[error("自动化水平无效: category={category}, value={value} (允许区间 [0, 1])")]
    InvalidAutomationLevel {
        category: AutomationCategory,
        value: f64,
    },

    #[error("预测期无效: {months} 个月 (允许区间 [1, {max}])")]
    InvalidHorizon { months: u32, max: u32 },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 配置与导出错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("导出失败: {0}")]
    ExportError(String),
}

// ==========================================
// 从 DomainError 转换
// ==========================================
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidHorizon { months, max } => ApiError::InvalidHorizon { months, max },
            DomainError::AutomationLevelOutOfRange { value } => {
                ApiError::InvalidInput(format!("自动化水平超出范围: {}", value))
            }
        }
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
