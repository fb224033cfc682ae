// ==========================================
// 制造业自动化投资仿真系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供命令行与宿主应用调用
// ==========================================

pub mod error;
pub mod simulation_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use simulation_api::SimulationApi;
pub use validator::{resolve_levels, validate_horizon, validate_level};
