// ==========================================
// 制造业自动化投资仿真系统 - 优化计算器
// ==========================================
// 职责: (BaselineModel, 自动化水平) → OptimizationResult
// 规则: 有效比率 = 基础因子 × 水平; 节省 = 成本科目 × 有效比率
// 红线: 四个计算器互不共享可变状态, 对合法输入是全函数 (无 NaN/Inf)
// ==========================================

mod inventory;
mod labor;
mod quality;
mod service;


pub use inventory::InventoryCalculator;
pub use labor::LaborCalculator;
pub use quality::QualityCalculator;
pub use service::ServiceCalculator;

use crate::config::SimulationConfig;
use crate::domain::baseline::BaselineModel;
use crate::domain::optimization::OptimizationResult;
use crate::domain::simulation::OptimizationSet;
use crate::domain::types::{AutomationCategory, AutomationLevel, AutomationLevels};

// ==========================================
// 优化计算器 Trait
// ==========================================

/// 单类别优化计算器
///
/// 实现方只读取基线与注入的因子, 每次调用重新计算
pub trait OptimizationCalculator: Send + Sync {
    fn category(&self) -> AutomationCategory;

    fn calculate(&self, baseline: &BaselineModel, level: AutomationLevel) -> OptimizationResult;
}

// ==========================================
// CalculatorSet - 四类计算器集合
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CalculatorSet {
    pub labor: LaborCalculator,
    pub quality: QualityCalculator,
    pub inventory: InventoryCalculator,
    pub service: ServiceCalculator,
}

impl CalculatorSet {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            labor: LaborCalculator::new(config.labor.clone()),
            quality: QualityCalculator::new(config.quality.clone()),
            inventory: InventoryCalculator::new(config.inventory.clone()),
            service: ServiceCalculator::new(config.service.clone()),
        }
    }

    pub fn get(&self, category: AutomationCategory) -> &dyn OptimizationCalculator {
        match category {
            AutomationCategory::Labor => &self.labor,
            AutomationCategory::Quality => &self.quality,
            AutomationCategory::Inventory => &self.inventory,
            AutomationCategory::Service => &self.service,
        }
    }

    /// 按各类别水平运行四个计算器
    pub fn calculate_all(&self, baseline: &BaselineModel, levels: &AutomationLevels) -> OptimizationSet {
        OptimizationSet {
            labor: self.labor.calculate(baseline, levels.labor),
            quality: self.quality.calculate(baseline, levels.quality),
            inventory: self.inventory.calculate(baseline, levels.inventory),
            service: self.service.calculate(baseline, levels.service),
        }
    }
}
