use super::OptimizationCalculator;
use crate::config::ServiceFactors;
use crate::domain::baseline::BaselineModel;
use crate::domain::optimization::{OptimizationResult, SavingsBreakdown};
use crate::domain::types::{AutomationCategory, AutomationLevel};
use tracing::instrument;

// ==========================================
// ServiceCalculator - 客户服务自动化
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ServiceCalculator {
    factors: ServiceFactors,
}

impl ServiceCalculator {
    pub fn new(factors: ServiceFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &ServiceFactors {
        &self.factors
    }
}

impl OptimizationCalculator for ServiceCalculator {
    fn category(&self) -> AutomationCategory {
        AutomationCategory::Service
    }

    #[instrument(skip(self, baseline), fields(level = level.value()))]
    fn calculate(&self, baseline: &BaselineModel, level: AutomationLevel) -> OptimizationResult {
        let f = &self.factors;
        let scale = level.value();
        let costs = &baseline.cost_breakdown;

        let automation_rate = f.automation_rate * scale;
        let productivity_gain = f.agent_productivity_gain * scale;
        let cost_reduction = f.cost_per_interaction_reduction * scale;

        // 自动化处理的交互中只有一部分真正节省坐席时间
        let agent_cost_savings = costs.agent_salaries * automation_rate * f.automated_agent_weight;
        let productivity_savings = costs.agent_salaries * productivity_gain;
        let system_efficiency_savings = costs.system_costs * cost_reduction;

        let platform_cost = baseline.revenue() * f.platform_cost_rate * scale;
        let setup_cost = f.base_setup_cost * scale;

        OptimizationResult::from_parts(
            level,
            SavingsBreakdown::Service {
                agent_cost_savings,
                productivity_savings,
                system_efficiency_savings,
            },
            platform_cost,
            setup_cost,
        )
    }
}
