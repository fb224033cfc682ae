// ==========================================
// 制造业自动化投资仿真系统 - 配置层
// ==========================================
// 职责: 因子/参数的不可变配置, JSON 文件加载与校验
// 红线: 引擎只读取注入的配置, 不读取全局状态
// ==========================================

pub mod config_manager;
pub mod error;
pub mod factors;
pub mod simulation_config;

// 重导出核心配置类型
pub use config_manager::{default_config_path, ConfigManager, ConfigSource, CONFIG_ENV_VAR};
pub use error::{ConfigError, ConfigResult};
pub use factors::{
    AnalysisSettings, DecompositionRatios, InventoryFactors, LaborFactors, ProjectionSettings,
    QualityFactors, RampWindow, ServiceFactors,
};
pub use simulation_config::SimulationConfig;
