use super::OptimizationCalculator;
use crate::config::LaborFactors;
use crate::domain::baseline::BaselineModel;
use crate::domain::optimization::{OptimizationResult, SavingsBreakdown};
use crate::domain::types::{AutomationCategory, AutomationLevel, ScaleTier};
use tracing::instrument;

// ==========================================
// LaborCalculator - 人工优化
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct LaborCalculator {
    factors: LaborFactors,
}

impl LaborCalculator {
    pub fn new(factors: LaborFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &LaborFactors {
        &self.factors
    }

    /// 按员工数分档: > 200 大型, < 25 小型
    pub fn company_tier(&self, employee_count: u32) -> ScaleTier {
        ScaleTier::classify(
            u64::from(employee_count),
            u64::from(self.factors.small_company_threshold),
            u64::from(self.factors.large_company_threshold),
        )
    }
}

impl OptimizationCalculator for LaborCalculator {
    fn category(&self) -> AutomationCategory {
        AutomationCategory::Labor
    }

    #[instrument(skip(self, baseline), fields(level = level.value()))]
    fn calculate(&self, baseline: &BaselineModel, level: AutomationLevel) -> OptimizationResult {
        let f = &self.factors;
        let scale = level.value();
        let costs = &baseline.cost_breakdown;
        let employees = baseline.employee_count();

        let productivity_gain = f.productivity_gain * scale;
        let error_reduction = f.error_reduction * scale;
        let overtime_reduction = f.overtime_reduction * scale;

        let mut direct_labor_savings = costs.direct_labor_cost * productivity_gain;
        let indirect_labor_savings = costs.indirect_labor_cost * error_reduction * f.indirect_error_weight;
        let overtime_savings = costs.overtime_cost * overtime_reduction;

        // 规模效应只作用于直接人工
        let implementation_rate = match self.company_tier(employees) {
            ScaleTier::Large => {
                direct_labor_savings *= f.large_company_savings_multiplier;
                f.large_company_implementation_rate
            }
            ScaleTier::Small => {
                direct_labor_savings *= f.small_company_savings_multiplier;
                f.small_company_implementation_rate
            }
            ScaleTier::Medium => f.medium_company_implementation_rate,
        };

        let per_employee_training = if employees < f.small_workforce_threshold {
            f.small_workforce_training_cost
        } else {
            f.training_cost_per_employee
        };
        let training_cost = f64::from(employees) * per_employee_training * scale;
        let implementation_cost = baseline.revenue() * implementation_rate * scale;

        OptimizationResult::from_parts(
            level,
            SavingsBreakdown::Labor {
                direct_labor_savings,
                indirect_labor_savings,
                overtime_savings,
            },
            implementation_cost,
            training_cost,
        )
    }
}
