// ==========================================
// 制造业自动化投资仿真系统 - 成本拆分模型
// ==========================================
// 由 4 个 P&L 汇总按固定比例拆分得到, 一经计算不可变
// ==========================================

use crate::domain::types::AutomationCategory;
use serde::{Deserialize, Serialize};

/// 年度明细成本
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    // 人工成本
    pub direct_labor_cost: f64,
    pub indirect_labor_cost: f64,
    pub overtime_cost: f64,
    pub benefits_cost: f64,

    // 质量成本
    pub rework_cost: f64,
    pub scrap_cost: f64,
    pub inspection_cost: f64,
    pub warranty_cost: f64,

    // 库存成本
    pub carrying_cost: f64,
    pub storage_cost: f64,
    pub obsolescence_cost: f64,
    pub insurance_cost: f64,

    // 客服成本
    pub agent_salaries: f64,
    pub system_costs: f64,
    pub training_costs: f64,
}

impl CostBreakdown {
    pub fn labor_total(&self) -> f64 {
        self.direct_labor_cost + self.indirect_labor_cost + self.overtime_cost + self.benefits_cost
    }

    pub fn quality_total(&self) -> f64 {
        self.rework_cost + self.scrap_cost + self.inspection_cost + self.warranty_cost
    }

    pub fn inventory_total(&self) -> f64 {
        self.carrying_cost + self.storage_cost + self.obsolescence_cost + self.insurance_cost
    }

    pub fn service_total(&self) -> f64 {
        self.agent_salaries + self.system_costs + self.training_costs
    }

    /// 某类别的成本小计
    pub fn category_total(&self, category: AutomationCategory) -> f64 {
        match category {
            AutomationCategory::Labor => self.labor_total(),
            AutomationCategory::Quality => self.quality_total(),
            AutomationCategory::Inventory => self.inventory_total(),
            AutomationCategory::Service => self.service_total(),
        }
    }

    /// 全部明细成本之和
    pub fn total_costs(&self) -> f64 {
        self.labor_total() + self.quality_total() + self.inventory_total() + self.service_total()
    }
}
