// ==========================================
// 制造业自动化投资仿真系统 - 请求参数校验器
// ==========================================
// 职责: 调用方契约校验 (自动化水平、预测期)
// 红线: 校验失败返回带类别与取值的显式错误, 不做静默截断
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::simulation::AutomationLevelsInput;
use crate::domain::types::{AutomationCategory, AutomationLevel, AutomationLevels};

/// 校验单个类别的自动化水平
///
/// # 返回
/// - Ok(AutomationLevel): value ∈ [0, 1] 且有限
/// - Err(ApiError::InvalidAutomationLevel): 超出区间、NaN 或无穷
pub fn validate_level(category: AutomationCategory, value: f64) -> ApiResult<AutomationLevel> {
    AutomationLevel::new(value).map_err(|_| ApiError::InvalidAutomationLevel { category, value })
}

/// 将请求中的水平解析为完整的四类水平
///
/// 缺省类别使用 default_level
pub fn resolve_levels(input: &AutomationLevelsInput, default_level: f64) -> ApiResult<AutomationLevels> {
    let mut levels = AutomationLevels::default();
    for category in AutomationCategory::ALL {
        let value = input.get(category).unwrap_or(default_level);
        levels = levels.with(category, validate_level(category, value)?);
    }
    Ok(levels)
}

/// 校验预测月数 ∈ [1, max]
pub fn validate_horizon(months: u32, max: u32) -> ApiResult<()> {
    if months == 0 || months > max {
        return Err(ApiError::InvalidHorizon { months, max });
    }
    Ok(())
}
