use super::OptimizationCalculator;
use crate::config::QualityFactors;
use crate::domain::baseline::BaselineModel;
use crate::domain::optimization::{OptimizationResult, SavingsBreakdown};
use crate::domain::types::{AutomationCategory, AutomationLevel, ScaleTier};
use tracing::instrument;

// ==========================================
// QualityCalculator - 质量控制优化
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct QualityCalculator {
    factors: QualityFactors,
}

impl QualityCalculator {
    pub fn new(factors: QualityFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &QualityFactors {
        &self.factors
    }

    /// 按年产量分档: > 1,000,000 高产量, < 100,000 低产量
    pub fn volume_tier(&self, production_volume: u64) -> ScaleTier {
        ScaleTier::classify(
            production_volume,
            self.factors.low_volume_threshold,
            self.factors.high_volume_threshold,
        )
    }
}

impl OptimizationCalculator for QualityCalculator {
    fn category(&self) -> AutomationCategory {
        AutomationCategory::Quality
    }

    #[instrument(skip(self, baseline), fields(level = level.value()))]
    fn calculate(&self, baseline: &BaselineModel, level: AutomationLevel) -> OptimizationResult {
        let f = &self.factors;
        let scale = level.value();
        let costs = &baseline.cost_breakdown;

        let defect_reduction = f.defect_reduction * scale;
        let rework_reduction = f.rework_reduction * scale;
        let scrap_reduction = f.scrap_reduction * scale;

        let mut rework_savings = costs.rework_cost * rework_reduction;
        let mut scrap_savings = costs.scrap_cost * scrap_reduction;
        let inspection_savings = costs.inspection_cost * defect_reduction * f.inspection_defect_weight;
        let warranty_savings = costs.warranty_cost * defect_reduction;

        // 产量效应作用于返工与报废
        let system_rate = match self.volume_tier(baseline.production_volume()) {
            ScaleTier::Large => {
                rework_savings *= f.high_volume_savings_multiplier;
                scrap_savings *= f.high_volume_savings_multiplier;
                f.high_volume_system_rate
            }
            ScaleTier::Small => {
                rework_savings *= f.low_volume_savings_multiplier;
                scrap_savings *= f.low_volume_savings_multiplier;
                f.low_volume_system_rate
            }
            ScaleTier::Medium => f.standard_system_rate,
        };

        let quality_system_cost = baseline.revenue() * system_rate * scale;
        let training_cost = f64::from(baseline.employee_count()) * f.training_cost_per_employee * scale;

        OptimizationResult::from_parts(
            level,
            SavingsBreakdown::Quality {
                rework_savings,
                scrap_savings,
                inspection_savings,
                warranty_savings,
            },
            quality_system_cost,
            training_cost,
        )
    }
}
