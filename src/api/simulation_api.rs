// ==========================================
// 制造业自动化投资仿真系统 - 仿真 API
// ==========================================
// 职责: 对外服务门面, 参数校验后委托仿真编排器
// 红线: 不持有可变状态, 可被多个调用方并发共享
// ==========================================

use chrono::{NaiveDate, Utc};

use crate::api::error::ApiResult;
use crate::api::validator::{resolve_levels, validate_horizon, validate_level};
use crate::config::{ConfigManager, SimulationConfig};
use crate::domain::analysis::BreakEvenAnalysis;
use crate::domain::baseline::BaselineModel;
use crate::domain::financial::{CompanyProfile, FinancialAggregates};
use crate::domain::optimization::OptimizationResult;
use crate::domain::projection::MonthlyProjection;
use crate::domain::simulation::{AutomationLevelsInput, QuickAdjustment, SimulationReport, SimulationRequest};
use crate::domain::types::{AutomationCategory, AutomationLevels};
use crate::engine::SimulationEngine;

// ==========================================
// SimulationApi - 仿真 API
// ==========================================

/// 仿真服务门面
///
/// 职责：
/// 1. 基线构建 (永不失败)
/// 2. 单类别优化计算 (校验自动化水平)
/// 3. 月度预测与盈亏平衡分析 (校验预测期)
/// 4. 完整仿真与快速调整
#[derive(Debug, Clone, Default)]
pub struct SimulationApi {
    engine: SimulationEngine,
}

impl SimulationApi {
    pub fn new(engine: SimulationEngine) -> Self {
        Self { engine }
    }

    /// 使用配置管理器中的配置创建
    pub fn from_config_manager(manager: &ConfigManager) -> Self {
        Self::new(SimulationEngine::new(manager.config().clone()))
    }

    pub fn config(&self) -> &SimulationConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    // ==========================================
    // 基线
    // ==========================================

    pub fn build_baseline(&self, financial: &FinancialAggregates, profile: &CompanyProfile) -> BaselineModel {
        self.engine.build_baseline(financial, profile)
    }

    // ==========================================
    // 单类别优化
    // ==========================================

    pub fn calculate_labor(&self, baseline: &BaselineModel, level: f64) -> ApiResult<OptimizationResult> {
        self.calculate(AutomationCategory::Labor, baseline, level)
    }

    pub fn calculate_quality(&self, baseline: &BaselineModel, level: f64) -> ApiResult<OptimizationResult> {
        self.calculate(AutomationCategory::Quality, baseline, level)
    }

    pub fn calculate_inventory(&self, baseline: &BaselineModel, level: f64) -> ApiResult<OptimizationResult> {
        self.calculate(AutomationCategory::Inventory, baseline, level)
    }

    pub fn calculate_service(&self, baseline: &BaselineModel, level: f64) -> ApiResult<OptimizationResult> {
        self.calculate(AutomationCategory::Service, baseline, level)
    }

    /// 按类别计算
    ///
    /// # 返回
    /// - Err(ApiError::InvalidAutomationLevel): level ∉ [0, 1] 或非有限值
    pub fn calculate(
        &self,
        category: AutomationCategory,
        baseline: &BaselineModel,
        level: f64,
    ) -> ApiResult<OptimizationResult> {
        let level = validate_level(category, level)?;
        Ok(self.engine.calculate(category, baseline, level))
    }

    // ==========================================
    // 预测与分析
    // ==========================================

    /// 生成月度预测, 恰好 months 个元素
    pub fn generate_monthly_projections(
        &self,
        baseline: &BaselineModel,
        levels: &AutomationLevelsInput,
        months: u32,
    ) -> ApiResult<Vec<MonthlyProjection>> {
        validate_horizon(months, self.config().projection.max_horizon_months)?;
        let levels = self.resolve_levels(levels)?;
        Ok(self.engine.project(baseline, &levels, months)?)
    }

    /// 盈亏平衡分析, 以今天为基准日
    pub fn analyze_break_even(&self, projections: &[MonthlyProjection]) -> BreakEvenAnalysis {
        self.analyze_break_even_as_of(projections, today())
    }

    pub fn analyze_break_even_as_of(&self, projections: &[MonthlyProjection], as_of: NaiveDate) -> BreakEvenAnalysis {
        self.engine.analyze(projections, as_of)
    }

    // ==========================================
    // 完整仿真
    // ==========================================

    /// 执行完整仿真, 以今天为基准日
    pub fn run_simulation(&self, request: &SimulationRequest) -> ApiResult<SimulationReport> {
        self.run_simulation_as_of(request, today())
    }

    /// 执行完整仿真
    ///
    /// # 参数
    /// - request: 仿真请求
    /// - as_of: 盈亏平衡日期的基准日
    pub fn run_simulation_as_of(&self, request: &SimulationRequest, as_of: NaiveDate) -> ApiResult<SimulationReport> {
        validate_horizon(request.projection_months, self.config().projection.max_horizon_months)?;
        let levels = self.resolve_levels(&request.automation_levels)?;

        let report = self.engine.run(
            &request.financial,
            &request.profile,
            &levels,
            request.projection_months,
            as_of,
        )?;
        Ok(report)
    }

    /// 快速调整: 在已有基线上以新水平重算
    pub fn adjust(&self, baseline: &BaselineModel, levels: &AutomationLevelsInput) -> ApiResult<QuickAdjustment> {
        let levels = self.resolve_levels(levels)?;
        Ok(self.engine.adjust(baseline, &levels))
    }

    fn resolve_levels(&self, input: &AutomationLevelsInput) -> ApiResult<AutomationLevels> {
        resolve_levels(input, self.config().projection.default_automation_level)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
