// ==========================================
// 制造业自动化投资仿真系统 - 仿真编排器
// ==========================================
// 用途: 协调五个核心组件的执行顺序
// 流程: 基线工厂 → 成本拆分 → 四个优化计算器 → 月度预测 → 盈亏平衡分析
// 红线: 同步、无副作用, 单次请求内基线只构建一次
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::analysis::BreakEvenAnalysis;
use crate::domain::baseline::BaselineModel;
use crate::domain::error::DomainError;
use crate::domain::financial::{CompanyProfile, FinancialAggregates};
use crate::domain::optimization::OptimizationResult;
use crate::domain::projection::MonthlyProjection;
use crate::domain::simulation::{QuickAdjustment, SimulationReport, SimulationSummary};
use crate::domain::types::{AutomationCategory, AutomationLevel, AutomationLevels};
use crate::engine::baseline_factory::BaselineFactory;
use crate::engine::break_even::BreakEvenAnalyzer;
use crate::engine::decomposition::CostDecomposer;
use crate::engine::projection::ProjectionGenerator;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// 快速调整的预测月数
const QUICK_ADJUST_MONTHS: u32 = 12;

/// 快速调整返回的预览月数
const QUICK_ADJUST_PREVIEW_MONTHS: usize = 6;

// ==========================================
// SimulationEngine - 仿真编排器
// ==========================================
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: SimulationConfig,
    factory: BaselineFactory,
    generator: ProjectionGenerator,
    analyzer: BreakEvenAnalyzer,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl SimulationEngine {
    /// 创建编排器
    ///
    /// # 参数
    /// - config: 已校验的仿真配置
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            factory: BaselineFactory::new(CostDecomposer::new(config.decomposition.clone())),
            generator: ProjectionGenerator::from_config(&config),
            analyzer: BreakEvenAnalyzer::new(config.analysis.clone()),
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn generator(&self) -> &ProjectionGenerator {
        &self.generator
    }

    // ==========================================
    // 单步入口
    // ==========================================

    pub fn build_baseline(&self, financial: &FinancialAggregates, profile: &CompanyProfile) -> BaselineModel {
        self.factory.build(financial, profile)
    }

    pub fn calculate(
        &self,
        category: AutomationCategory,
        baseline: &BaselineModel,
        level: AutomationLevel,
    ) -> OptimizationResult {
        self.generator.calculators().get(category).calculate(baseline, level)
    }

    pub fn project(
        &self,
        baseline: &BaselineModel,
        levels: &AutomationLevels,
        months: u32,
    ) -> Result<Vec<MonthlyProjection>, DomainError> {
        self.generator.project(baseline, levels, months)
    }

    pub fn analyze(&self, projections: &[MonthlyProjection], as_of: NaiveDate) -> BreakEvenAnalysis {
        self.analyzer.analyze(projections, as_of)
    }

    // ==========================================
    // 完整流程
    // ==========================================

    /// 执行完整仿真
    ///
    /// # 参数
    /// - financial: P&L 汇总
    /// - profile: 企业画像
    /// - levels: 已校验的各类别自动化水平
    /// - months: 预测月数
    /// - as_of: 盈亏平衡日期的基准日
    ///
    /// # 返回
    /// - Err(DomainError::InvalidHorizon): 预测月数非法
    #[instrument(skip(self, financial, profile, levels), fields(revenue = financial.revenue))]
    pub fn run(
        &self,
        financial: &FinancialAggregates,
        profile: &CompanyProfile,
        levels: &AutomationLevels,
        months: u32,
        as_of: NaiveDate,
    ) -> Result<SimulationReport, DomainError> {
        self.generator.check_horizon(months)?;

        // 步骤1: 基线 (画像解析 + 成本拆分)
        let baseline = self.factory.build(financial, profile);

        // 步骤2: 四个优化计算器
        debug!("步骤2: 计算各类别优化结果");
        let optimizations = self.generator.calculators().calculate_all(&baseline, levels);

        // 步骤3: 月度预测
        debug!("步骤3: 生成月度预测");
        let projections = self.generator.project_results(&baseline, &optimizations, months);

        // 步骤4: 盈亏平衡分析
        debug!("步骤4: 盈亏平衡分析");
        let break_even = self.analyzer.analyze(&projections, as_of);
        let period_summaries = self.analyzer.summarize_periods(&projections);

        let total_current_costs = baseline.cost_breakdown.total_costs();
        let total_annual_savings = optimizations.total_annual_savings();
        let summary = SimulationSummary {
            total_annual_savings,
            total_implementation_cost: optimizations.total_one_time_cost(),
            total_current_costs,
            total_optimized_costs: total_current_costs - total_annual_savings,
            payback_months: break_even.break_even_month,
            roi_percentage: break_even.final_roi_percentage,
        };

        let report = SimulationReport {
            simulation_id: Uuid::new_v4(),
            created_at: Utc::now(),
            as_of,
            automation_levels: *levels,
            baseline,
            optimizations,
            projections,
            break_even,
            period_summaries,
            summary,
        };

        info!(
            simulation_id = %report.simulation_id,
            total_annual_savings = report.summary.total_annual_savings,
            total_implementation_cost = report.summary.total_implementation_cost,
            break_even_month = ?report.break_even.break_even_month,
            roi_percentage = report.summary.roi_percentage,
            "仿真完成"
        );

        Ok(report)
    }

    /// 快速调整 (what-if): 在已有基线上以新水平重算 12 个月
    #[instrument(skip(self, baseline, levels))]
    pub fn adjust(&self, baseline: &BaselineModel, levels: &AutomationLevels) -> QuickAdjustment {
        let optimizations = self.generator.calculators().calculate_all(baseline, levels);
        let mut projections = self
            .generator
            .project_results(baseline, &optimizations, QUICK_ADJUST_MONTHS);

        let total_annual_savings = optimizations.total_annual_savings();
        let total_implementation_cost = optimizations.total_one_time_cost();
        let overall_roi_year1 = if total_implementation_cost > 0.0 {
            (total_annual_savings - total_implementation_cost) / total_implementation_cost * 100.0
        } else {
            0.0
        };
        let break_even_month = projections.iter().find(|p| p.payback_achieved).map(|p| p.month);

        projections.truncate(QUICK_ADJUST_PREVIEW_MONTHS);

        info!(
            total_annual_savings,
            overall_roi_year1,
            break_even_month = ?break_even_month,
            "快速调整完成"
        );

        QuickAdjustment {
            automation_levels: *levels,
            labor_annual_savings: optimizations.labor.total_annual_savings,
            quality_annual_savings: optimizations.quality.total_annual_savings,
            inventory_annual_savings: optimizations.inventory.total_annual_savings,
            service_annual_savings: optimizations.service.total_annual_savings,
            total_annual_savings,
            total_implementation_cost,
            overall_roi_year1,
            break_even_month,
            preview: projections,
        }
    }
}
