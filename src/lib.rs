// ==========================================
// 制造业自动化投资仿真系统 - 核心库
// ==========================================
// 系统定位: 自动化投资的财务影响评估 (确定性、同步、无持久化)
// 流程: 基线构建 → 四类别优化 → 月度预测 → 盈亏平衡 / ROI 分析
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 因子与参数
pub mod config;

// 引擎层 - 计算规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态、报告、导出
pub mod app;

// 命令行定义
pub mod cli;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AutomationCategory, AutomationLevel, AutomationLevels, ScaleTier};

// 领域实体
pub use domain::{
    BaselineModel, BreakEvenAnalysis, CompanyProfile, CostBreakdown, FinancialAggregates,
    MonthlyProjection, OptimizationResult, QuickAdjustment, SimulationReport, SimulationRequest,
};

// 配置
pub use config::{ConfigManager, SimulationConfig};

// 引擎
pub use engine::{
    BaselineFactory, BreakEvenAnalyzer, CostDecomposer, ProjectionGenerator, SimulationEngine,
};

// API
pub use api::{ApiError, ApiResult, SimulationApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "制造业自动化投资仿真系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
