use super::OptimizationCalculator;
use crate::config::InventoryFactors;
use crate::domain::baseline::BaselineModel;
use crate::domain::optimization::{OptimizationResult, SavingsBreakdown};
use crate::domain::types::{AutomationCategory, AutomationLevel};
use tracing::instrument;

// ==========================================
// InventoryCalculator - 库存管理优化
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InventoryCalculator {
    factors: InventoryFactors,
}

impl InventoryCalculator {
    pub fn new(factors: InventoryFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &InventoryFactors {
        &self.factors
    }
}

impl OptimizationCalculator for InventoryCalculator {
    fn category(&self) -> AutomationCategory {
        AutomationCategory::Inventory
    }

    #[instrument(skip(self, baseline), fields(level = level.value()))]
    fn calculate(&self, baseline: &BaselineModel, level: AutomationLevel) -> OptimizationResult {
        let f = &self.factors;
        let scale = level.value();
        let costs = &baseline.cost_breakdown;

        let turnover_improvement = f.turnover_improvement * scale;
        let carrying_cost_reduction = f.carrying_cost_reduction * scale;
        let obsolescence_reduction = f.obsolescence_reduction * scale;

        let carrying_cost_savings = costs.carrying_cost * carrying_cost_reduction;
        let storage_savings = costs.storage_cost * turnover_improvement * f.storage_turnover_weight;
        let obsolescence_savings = costs.obsolescence_cost * obsolescence_reduction;

        // 周转加快释放的营运资金按资金成本折算为年收益
        let inventory_value = baseline.cogs() * f.inventory_share_of_cogs;
        let working_capital_freed = inventory_value * turnover_improvement;
        let working_capital_benefit = working_capital_freed * f.cost_of_capital;

        let system_cost = baseline.revenue() * f.system_cost_rate * scale;
        let training_cost = f64::from(baseline.employee_count()) * f.training_cost_per_employee * scale;

        OptimizationResult::from_parts(
            level,
            SavingsBreakdown::Inventory {
                carrying_cost_savings,
                storage_savings,
                obsolescence_savings,
                working_capital_benefit,
                working_capital_freed,
            },
            system_cost,
            training_cost,
        )
    }
}
