// ==========================================
// 制造业自动化投资仿真系统 - 请求读取
// ==========================================
// 职责: 从 JSON 文件读取仿真请求
// ==========================================

use std::fs;
use std::path::Path;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::simulation::SimulationRequest;

/// 解析 JSON 仿真请求
///
/// 缺省字段: profile 使用默认画像, automation_levels 使用配置默认水平, projection_months = 24
pub fn parse_request(raw: &str) -> ApiResult<SimulationRequest> {
    serde_json::from_str(raw).map_err(|e| ApiError::InvalidInput(format!("仿真请求解析失败: {}", e)))
}

/// 从文件读取仿真请求
pub fn load_request(path: &Path) -> ApiResult<SimulationRequest> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ApiError::InvalidInput(format!("无法读取 {}: {}", path.display(), e)))?;
    parse_request(&raw)
}
