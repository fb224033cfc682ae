// ==========================================
// 制造业自动化投资仿真系统 - 领域模型层
// ==========================================
// 职责: 定义输入、基线、优化结果、预测与报告等值对象
// 红线: 不含计算逻辑, 所有对象构建后不可变
// ==========================================

pub mod analysis;
pub mod baseline;
pub mod cost_breakdown;
pub mod error;
pub mod financial;
pub mod optimization;
pub mod projection;
pub mod simulation;
pub mod types;

// 重导出核心类型
pub use analysis::{BreakEvenAnalysis, ProjectionPeriodSummary, RoiMetrics};
pub use baseline::{AutomationMaturity, BaselineModel, ManufacturingMetrics, OperationalProfile};
pub use cost_breakdown::CostBreakdown;
pub use error::DomainError;
pub use financial::{CompanyProfile, FinancialAggregates, QuestionnaireInsights};
pub use optimization::{OptimizationResult, SavingsBreakdown, PAYBACK_SENTINEL_MONTHS};
pub use projection::MonthlyProjection;
pub use simulation::{
    AutomationLevelsInput, OptimizationSet, QuickAdjustment, SimulationReport, SimulationRequest,
    SimulationSummary,
};
pub use types::{AutomationCategory, AutomationLevel, AutomationLevels, OpportunityPotential, ScaleTier};
