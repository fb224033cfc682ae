// ==========================================
// 制造业自动化投资仿真系统 - 优化结果
// ==========================================
// 每次调用重新计算, 不跨自动化水平缓存
// ==========================================

use crate::domain::types::{AutomationCategory, AutomationLevel};
use serde::{Deserialize, Serialize};

/// 年节省额 ≤ 0 时的回本月数哨兵值
pub const PAYBACK_SENTINEL_MONTHS: f64 = 999.0;

// ==========================================
// SavingsBreakdown - 分项节省额 (年)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsBreakdown {
    Labor {
        direct_labor_savings: f64,
        indirect_labor_savings: f64,
        overtime_savings: f64,
    },
    Quality {
        rework_savings: f64,
        scrap_savings: f64,
        inspection_savings: f64,
        warranty_savings: f64,
    },
    Inventory {
        carrying_cost_savings: f64,
        storage_savings: f64,
        obsolescence_savings: f64,
        working_capital_benefit: f64,
        /// 释放的营运资金 (存量, 不计入年节省)
        working_capital_freed: f64,
    },
    Service {
        agent_cost_savings: f64,
        productivity_savings: f64,
        system_efficiency_savings: f64,
    },
}

impl SavingsBreakdown {
    pub fn category(&self) -> AutomationCategory {
        match self {
            SavingsBreakdown::Labor { .. } => AutomationCategory::Labor,
            SavingsBreakdown::Quality { .. } => AutomationCategory::Quality,
            SavingsBreakdown::Inventory { .. } => AutomationCategory::Inventory,
            SavingsBreakdown::Service { .. } => AutomationCategory::Service,
        }
    }

    /// 计入年节省的分项 (名称, 金额)
    pub fn items(&self) -> Vec<(&'static str, f64)> {
        match *self {
            SavingsBreakdown::Labor {
                direct_labor_savings,
                indirect_labor_savings,
                overtime_savings,
            } => vec![
                ("direct_labor_savings", direct_labor_savings),
                ("indirect_labor_savings", indirect_labor_savings),
                ("overtime_savings", overtime_savings),
            ],
            SavingsBreakdown::Quality {
                rework_savings,
                scrap_savings,
                inspection_savings,
                warranty_savings,
            } => vec![
                ("rework_savings", rework_savings),
                ("scrap_savings", scrap_savings),
                ("inspection_savings", inspection_savings),
                ("warranty_savings", warranty_savings),
            ],
            SavingsBreakdown::Inventory {
                carrying_cost_savings,
                storage_savings,
                obsolescence_savings,
                working_capital_benefit,
                ..
            } => vec![
                ("carrying_cost_savings", carrying_cost_savings),
                ("storage_savings", storage_savings),
                ("obsolescence_savings", obsolescence_savings),
                ("working_capital_benefit", working_capital_benefit),
            ],
            SavingsBreakdown::Service {
                agent_cost_savings,
                productivity_savings,
                system_efficiency_savings,
            } => vec![
                ("agent_cost_savings", agent_cost_savings),
                ("productivity_savings", productivity_savings),
                ("system_efficiency_savings", system_efficiency_savings),
            ],
        }
    }

    /// 年节省合计
    pub fn total(&self) -> f64 {
        self.items().iter().map(|(_, amount)| amount).sum()
    }
}

// ==========================================
// OptimizationResult - 单类别优化结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub category: AutomationCategory,
    pub automation_level: AutomationLevel,
    pub savings: SavingsBreakdown,
    pub total_annual_savings: f64,
    /// 系统/平台实施成本
    pub implementation_cost: f64,
    /// 培训或部署成本
    pub training_or_setup_cost: f64,
    pub total_one_time_cost: f64,
    pub net_savings_year1: f64,
    pub payback_months: f64,
    pub roi_percentage: f64,
}

impl OptimizationResult {
    /// 由分项节省与一次性成本推导汇总指标
    ///
    /// - payback = 一次性成本 / (年节省/12), 年节省 ≤ 0 → 999
    /// - roi = 首年净节省 / 一次性成本 × 100, 成本为 0 → 0
    pub fn from_parts(
        automation_level: AutomationLevel,
        savings: SavingsBreakdown,
        implementation_cost: f64,
        training_or_setup_cost: f64,
    ) -> Self {
        let total_annual_savings = savings.total();
        let total_one_time_cost = implementation_cost + training_or_setup_cost;
        let net_savings_year1 = total_annual_savings - total_one_time_cost;

        let payback_months = if total_annual_savings > 0.0 {
            total_one_time_cost / (total_annual_savings / 12.0)
        } else {
            PAYBACK_SENTINEL_MONTHS
        };

        let roi_percentage = if total_one_time_cost > 0.0 {
            net_savings_year1 / total_one_time_cost * 100.0
        } else {
            0.0
        };

        Self {
            category: savings.category(),
            automation_level,
            savings,
            total_annual_savings,
            implementation_cost,
            training_or_setup_cost,
            total_one_time_cost,
            net_savings_year1,
            payback_months,
            roi_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labor_savings(direct: f64) -> SavingsBreakdown {
        SavingsBreakdown::Labor {
            direct_labor_savings: direct,
            indirect_labor_savings: 0.0,
            overtime_savings: 0.0,
        }
    }

    #[test]
    fn test_from_parts_metrics() {
        let result = OptimizationResult::from_parts(AutomationLevel::HALF, labor_savings(120_000.0), 50_000.0, 10_000.0);

        assert_eq!(result.category, AutomationCategory::Labor);
        assert_eq!(result.total_annual_savings, 120_000.0);
        assert_eq!(result.total_one_time_cost, 60_000.0);
        assert_eq!(result.net_savings_year1, 60_000.0);
        assert_eq!(result.payback_months, 6.0);
        assert_eq!(result.roi_percentage, 100.0);
    }

    #[test]
    fn test_sentinels_on_zero() {
        let result = OptimizationResult::from_parts(AutomationLevel::ZERO, labor_savings(0.0), 0.0, 0.0);

        assert_eq!(result.payback_months, PAYBACK_SENTINEL_MONTHS);
        assert_eq!(result.roi_percentage, 0.0);
        assert!(!result.payback_months.is_nan());
    }

    #[test]
    fn test_working_capital_freed_excluded_from_total() {
        let savings = SavingsBreakdown::Inventory {
            carrying_cost_savings: 10.0,
            storage_savings: 5.0,
            obsolescence_savings: 2.0,
            working_capital_benefit: 3.0,
            working_capital_freed: 1_000.0,
        };
        assert_eq!(savings.total(), 20.0);
        assert_eq!(savings.items().len(), 4);
    }
}
