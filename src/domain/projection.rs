// ==========================================
// 制造业自动化投资仿真系统 - 月度预测
// ==========================================
// 月份从 1 开始连续编号, 累计字段单调可追溯
// ==========================================

use crate::domain::types::AutomationCategory;
use serde::{Deserialize, Serialize};

/// 单月现金流预测
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub month: u32,

    // 基线月度背景 (年度成本 / 12)
    pub revenue: f64,
    pub labor_costs: f64,
    pub quality_costs: f64,
    pub inventory_costs: f64,
    pub service_costs: f64,

    // 当月节省 (已乘爬坡系数)
    pub labor_savings: f64,
    pub quality_savings: f64,
    pub inventory_savings: f64,
    pub service_savings: f64,
    pub total_savings: f64,

    /// 当月摊销的一次性投入
    pub implementation_cost: f64,
    pub monthly_cash_flow: f64,
    pub cumulative_cash_flow: f64,
    pub cumulative_savings: f64,
    pub roi_to_date: f64,
    pub payback_achieved: bool,
}

impl MonthlyProjection {
    pub fn savings_for(&self, category: AutomationCategory) -> f64 {
        match category {
            AutomationCategory::Labor => self.labor_savings,
            AutomationCategory::Quality => self.quality_savings,
            AutomationCategory::Inventory => self.inventory_savings,
            AutomationCategory::Service => self.service_savings,
        }
    }

    pub fn baseline_cost_for(&self, category: AutomationCategory) -> f64 {
        match category {
            AutomationCategory::Labor => self.labor_costs,
            AutomationCategory::Quality => self.quality_costs,
            AutomationCategory::Inventory => self.inventory_costs,
            AutomationCategory::Service => self.service_costs,
        }
    }
}
