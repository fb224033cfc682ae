// ==========================================
// 制造业自动化投资仿真系统 - 领域错误类型
// ==========================================

use thiserror::Error;

/// 领域层错误类型
///
/// 仅覆盖调用方契约违反; 数据质量问题 (未知问卷选项、零成本) 不是错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("自动化水平超出范围: {value} (允许区间 [0, 1])")]
    AutomationLevelOutOfRange { value: f64 },

    #[error("预测期无效: {months} 个月 (允许区间 [1, {max}])")]
    InvalidHorizon { months: u32, max: u32 },
}
