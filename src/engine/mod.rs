// ==========================================
// 制造业自动化投资仿真系统 - 引擎层
// ==========================================
// 职责: 成本拆分、优化计算、月度预测、盈亏平衡分析、基线构建与编排
// 红线: 纯计算, 不做 I/O, 因子只来自构造时注入的配置
// ==========================================

pub mod baseline_factory;
pub mod break_even;
pub mod bucket_table;
pub mod decomposition;
pub mod optimizer;
pub mod orchestrator;
pub mod projection;
pub mod ramp;

// 重导出核心引擎
pub use baseline_factory::BaselineFactory;
pub use break_even::BreakEvenAnalyzer;
pub use bucket_table::BucketTable;
pub use decomposition::CostDecomposer;
pub use optimizer::{
    CalculatorSet, InventoryCalculator, LaborCalculator, OptimizationCalculator, QualityCalculator,
    ServiceCalculator,
};
pub use orchestrator::SimulationEngine;
pub use projection::ProjectionGenerator;
pub use ramp::RampCurve;
