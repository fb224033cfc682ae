// ==========================================
// 制造业自动化投资仿真系统 - 月度预测生成器
// ==========================================
// 职责: 驱动四个优化计算器, 按类别爬坡生成逐月现金流
// 输入: BaselineModel + AutomationLevels + 预测月数
// 输出: Vec<MonthlyProjection>, 长度 = 月数, 月份 1..=N 递增
// 红线: 累计现金流从 0 起算, 一次性投入只通过前 N 月的摊销扣除 (只计一次)
// ==========================================

use crate::config::{ProjectionSettings, SimulationConfig};
use crate::domain::baseline::BaselineModel;
use crate::domain::error::DomainError;
use crate::domain::projection::MonthlyProjection;
use crate::domain::simulation::OptimizationSet;
use crate::domain::types::{AutomationCategory, AutomationLevels};
use crate::engine::optimizer::CalculatorSet;
use crate::engine::ramp::RampCurve;
use tracing::{info, instrument};

// ==========================================
// ProjectionGenerator - 月度预测生成器
// ==========================================
#[derive(Debug, Clone)]
pub struct ProjectionGenerator {
    calculators: CalculatorSet,
    curves: [RampCurve; 4],
    settings: ProjectionSettings,
}

impl Default for ProjectionGenerator {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl ProjectionGenerator {
    pub fn from_config(config: &SimulationConfig) -> Self {
        let bonus = config.projection.full_adoption_bonus;
        Self {
            calculators: CalculatorSet::from_config(config),
            curves: [
                RampCurve::new(config.labor.ramp, bonus),
                RampCurve::new(config.quality.ramp, bonus),
                RampCurve::new(config.inventory.ramp, bonus),
                RampCurve::new(config.service.ramp, bonus),
            ],
            settings: config.projection.clone(),
        }
    }

    pub fn calculators(&self) -> &CalculatorSet {
        &self.calculators
    }

    pub fn settings(&self) -> &ProjectionSettings {
        &self.settings
    }

    /// 某类别的爬坡曲线
    pub fn curve(&self, category: AutomationCategory) -> &RampCurve {
        match category {
            AutomationCategory::Labor => &self.curves[0],
            AutomationCategory::Quality => &self.curves[1],
            AutomationCategory::Inventory => &self.curves[2],
            AutomationCategory::Service => &self.curves[3],
        }
    }

    /// 校验预测月数 ∈ [1, max_horizon_months]
    pub fn check_horizon(&self, months: u32) -> Result<(), DomainError> {
        let max = self.settings.max_horizon_months;
        if months == 0 || months > max {
            return Err(DomainError::InvalidHorizon { months, max });
        }
        Ok(())
    }

    /// 生成月度预测
    ///
    /// # 参数
    /// - baseline: 基线模型
    /// - levels: 各类别自动化水平
    /// - months: 预测月数
    ///
    /// # 返回
    /// - Ok(Vec<MonthlyProjection>): 恰好 months 个元素
    /// - Err(DomainError::InvalidHorizon): months 为 0 或超过上限
    #[instrument(skip(self, baseline, levels))]
    pub fn project(
        &self,
        baseline: &BaselineModel,
        levels: &AutomationLevels,
        months: u32,
    ) -> Result<Vec<MonthlyProjection>, DomainError> {
        self.check_horizon(months)?;
        let optimizations = self.calculators.calculate_all(baseline, levels);
        Ok(self.project_results(baseline, &optimizations, months))
    }

    /// 基于已计算的优化结果生成月度预测
    ///
    /// 调用方负责校验 months
    pub fn project_results(
        &self,
        baseline: &BaselineModel,
        optimizations: &OptimizationSet,
        months: u32,
    ) -> Vec<MonthlyProjection> {
        let total_investment = optimizations.total_one_time_cost();
        let spread_months = self.settings.implementation_spread_months.min(months).max(1);
        let monthly_implementation = total_investment / f64::from(spread_months);

        let costs = &baseline.cost_breakdown;
        let revenue = baseline.revenue() / 12.0;
        let labor_costs = baseline.financials.labor_costs / 12.0;
        let quality_costs = costs.quality_total() / 12.0;
        let inventory_costs = costs.inventory_total() / 12.0;
        let service_costs = costs.service_total() / 12.0;

        let mut projections = Vec::with_capacity(months as usize);
        let mut cumulative_cash_flow = 0.0;
        let mut cumulative_savings = 0.0;

        for month in 1..=months {
            let [labor_savings, quality_savings, inventory_savings, service_savings] = AutomationCategory::ALL
                .map(|c| optimizations.get(c).total_annual_savings / 12.0 * self.curve(c).factor(month));
            let total_savings = labor_savings + quality_savings + inventory_savings + service_savings;

            let implementation_cost = if month <= spread_months {
                monthly_implementation
            } else {
                0.0
            };

            let monthly_cash_flow = total_savings - implementation_cost;
            cumulative_cash_flow += monthly_cash_flow;
            cumulative_savings += total_savings;

            let roi_to_date = if total_investment > 0.0 {
                (cumulative_savings - total_investment) / total_investment * 100.0
            } else {
                0.0
            };

            projections.push(MonthlyProjection {
                month,
                revenue,
                labor_costs,
                quality_costs,
                inventory_costs,
                service_costs,
                labor_savings,
                quality_savings,
                inventory_savings,
                service_savings,
                total_savings,
                implementation_cost,
                monthly_cash_flow,
                cumulative_cash_flow,
                cumulative_savings,
                roi_to_date,
                payback_achieved: cumulative_cash_flow >= 0.0,
            });
        }

        info!(
            months,
            total_investment,
            cumulative_savings,
            "月度预测已生成"
        );
        projections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::financial::{CompanyProfile, FinancialAggregates};
    use crate::domain::types::AutomationLevel;
    use crate::engine::baseline_factory::BaselineFactory;

    fn reference_baseline() -> BaselineModel {
        let financial = FinancialAggregates::new(5_000_000.0, 3_000_000.0, 1_200_000.0, 500_000.0);
        let profile = CompanyProfile::new("1000-10000 units/day", "51-200 employees", "Some automated tools");
        BaselineFactory::default().build(&financial, &profile)
    }

    #[test]
    fn test_length_and_month_order() {
        let generator = ProjectionGenerator::default();
        let projections = generator
            .project(&reference_baseline(), &AutomationLevels::default(), 24)
            .unwrap();

        assert_eq!(projections.len(), 24);
        for (i, p) in projections.iter().enumerate() {
            assert_eq!(p.month, i as u32 + 1, "月份应从 1 连续递增");
        }
    }

    #[test]
    fn test_invalid_horizon_rejected() {
        let generator = ProjectionGenerator::default();
        let baseline = reference_baseline();
        let levels = AutomationLevels::default();

        assert_eq!(
            generator.project(&baseline, &levels, 0),
            Err(DomainError::InvalidHorizon { months: 0, max: 120 })
        );
        assert!(generator.project(&baseline, &levels, 121).is_err());
        assert!(generator.project(&baseline, &levels, 120).is_ok());
    }

    #[test]
    fn test_investment_spread_over_six_months() {
        let generator = ProjectionGenerator::default();
        let baseline = reference_baseline();
        let levels = AutomationLevels::default();
        let total = generator.calculators().calculate_all(&baseline, &levels).total_one_time_cost();

        let projections = generator.project(&baseline, &levels, 24).unwrap();
        let booked: f64 = projections.iter().map(|p| p.implementation_cost).sum();

        assert!((booked - total).abs() < 1e-6, "投入应只计一次");
        assert!(projections[..6].iter().all(|p| (p.implementation_cost - total / 6.0).abs() < 1e-6));
        assert!(projections[6..].iter().all(|p| p.implementation_cost == 0.0));
    }

    #[test]
    fn test_short_horizon_spreads_over_available_months() {
        let generator = ProjectionGenerator::default();
        let baseline = reference_baseline();
        let levels = AutomationLevels::default();
        let total = generator.calculators().calculate_all(&baseline, &levels).total_one_time_cost();

        let projections = generator.project(&baseline, &levels, 3).unwrap();
        assert_eq!(projections.len(), 3);
        assert!(projections.iter().all(|p| (p.implementation_cost - total / 3.0).abs() < 1e-6));
    }

    #[test]
    fn test_cumulative_fields_consistent() {
        let generator = ProjectionGenerator::default();
        let projections = generator
            .project(&reference_baseline(), &AutomationLevels::default(), 36)
            .unwrap();

        let mut cash = 0.0;
        let mut savings = 0.0;
        for p in &projections {
            cash += p.monthly_cash_flow;
            savings += p.total_savings;
            assert!((p.cumulative_cash_flow - cash).abs() < 1e-6);
            assert!((p.cumulative_savings - savings).abs() < 1e-6);
            assert_eq!(p.payback_achieved, p.cumulative_cash_flow >= 0.0);
            let sum = p.labor_savings + p.quality_savings + p.inventory_savings + p.service_savings;
            assert!((p.total_savings - sum).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ramped_category_savings() {
        let generator = ProjectionGenerator::default();
        let baseline = reference_baseline();
        let levels = AutomationLevels::default();
        let annual = generator.calculators().calculate_all(&baseline, &levels).labor.total_annual_savings;

        let projections = generator.project(&baseline, &levels, 12).unwrap();
        // 人工 (4, 2): 第 1 月 25%, 第 6 月起 120%
        assert!((projections[0].labor_savings - annual / 12.0 * 0.25).abs() < 1e-6);
        assert!((projections[5].labor_savings - annual / 12.0 * 1.2).abs() < 1e-6);
        assert_eq!(projections[5].labor_savings, projections[11].labor_savings);
        assert_eq!(projections[0].savings_for(AutomationCategory::Labor), projections[0].labor_savings);
    }

    #[test]
    fn test_zero_levels_zero_everything() {
        let generator = ProjectionGenerator::default();
        let projections = generator
            .project(&reference_baseline(), &AutomationLevels::uniform(AutomationLevel::ZERO), 12)
            .unwrap();

        for p in &projections {
            assert_eq!(p.total_savings, 0.0);
            assert_eq!(p.implementation_cost, 0.0);
            assert_eq!(p.roi_to_date, 0.0);
            assert!(p.payback_achieved);
        }
    }

    #[test]
    fn test_baseline_context_is_monthly() {
        let projections = ProjectionGenerator::default()
            .project(&reference_baseline(), &AutomationLevels::default(), 1)
            .unwrap();
        let p = &projections[0];

        assert!((p.revenue - 5_000_000.0 / 12.0).abs() < 1e-6);
        assert!((p.labor_costs - 100_000.0).abs() < 1e-6);
        assert!((p.quality_costs - 450_000.0 / 12.0).abs() < 1e-6);
        assert!((p.baseline_cost_for(AutomationCategory::Service) - 50_000.0 / 12.0).abs() < 1e-6);
    }
}
