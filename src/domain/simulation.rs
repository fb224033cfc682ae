// ==========================================
// 制造业自动化投资仿真系统 - 仿真请求与报告
// ==========================================
// 职责: 一次完整仿真的输入 (请求) 与输出 (报告/快速调整)
// ==========================================

use crate::domain::analysis::{BreakEvenAnalysis, ProjectionPeriodSummary};
use crate::domain::baseline::BaselineModel;
use crate::domain::financial::{CompanyProfile, FinancialAggregates};
use crate::domain::optimization::OptimizationResult;
use crate::domain::projection::MonthlyProjection;
use crate::domain::types::{AutomationCategory, AutomationLevels};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_projection_months() -> u32 {
    24
}

// ==========================================
// AutomationLevelsInput - 未校验的自动化水平
// ==========================================
/// 请求中的自动化水平, 缺省类别使用配置的默认水平
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AutomationLevelsInput {
    #[serde(default)]
    pub labor: Option<f64>,
    #[serde(default)]
    pub quality: Option<f64>,
    #[serde(default)]
    pub inventory: Option<f64>,
    #[serde(default)]
    pub service: Option<f64>,
}

impl AutomationLevelsInput {
    pub fn get(&self, category: AutomationCategory) -> Option<f64> {
        match category {
            AutomationCategory::Labor => self.labor,
            AutomationCategory::Quality => self.quality,
            AutomationCategory::Inventory => self.inventory,
            AutomationCategory::Service => self.service,
        }
    }
}

impl From<AutomationLevels> for AutomationLevelsInput {
    fn from(levels: AutomationLevels) -> Self {
        Self {
            labor: Some(levels.labor.value()),
            quality: Some(levels.quality.value()),
            inventory: Some(levels.inventory.value()),
            service: Some(levels.service.value()),
        }
    }
}

// ==========================================
// SimulationRequest - 仿真请求 (场景文件)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub financial: FinancialAggregates,
    #[serde(default)]
    pub profile: CompanyProfile,
    #[serde(default)]
    pub automation_levels: AutomationLevelsInput,
    #[serde(default = "default_projection_months")]
    pub projection_months: u32,
}

impl SimulationRequest {
    pub fn new(financial: FinancialAggregates, profile: CompanyProfile) -> Self {
        Self {
            financial,
            profile,
            automation_levels: AutomationLevelsInput::default(),
            projection_months: default_projection_months(),
        }
    }

    pub fn with_levels(mut self, levels: AutomationLevelsInput) -> Self {
        self.automation_levels = levels;
        self
    }

    pub fn with_months(mut self, months: u32) -> Self {
        self.projection_months = months;
        self
    }
}

// ==========================================
// OptimizationSet - 四类优化结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSet {
    pub labor: OptimizationResult,
    pub quality: OptimizationResult,
    pub inventory: OptimizationResult,
    pub service: OptimizationResult,
}

impl OptimizationSet {
    pub fn get(&self, category: AutomationCategory) -> &OptimizationResult {
        match category {
            AutomationCategory::Labor => &self.labor,
            AutomationCategory::Quality => &self.quality,
            AutomationCategory::Inventory => &self.inventory,
            AutomationCategory::Service => &self.service,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptimizationResult> {
        [&self.labor, &self.quality, &self.inventory, &self.service].into_iter()
    }

    pub fn total_annual_savings(&self) -> f64 {
        self.iter().map(|r| r.total_annual_savings).sum()
    }

    pub fn total_one_time_cost(&self) -> f64 {
        self.iter().map(|r| r.total_one_time_cost).sum()
    }
}

// ==========================================
// SimulationSummary - 报告摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub total_annual_savings: f64,
    pub total_implementation_cost: f64,
    pub total_current_costs: f64,
    pub total_optimized_costs: f64,
    /// 盈亏平衡月; 预测期内未达到时为 None
    pub payback_months: Option<u32>,
    pub roi_percentage: f64,
}

// ==========================================
// SimulationReport - 完整仿真报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub simulation_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// 盈亏平衡日期的计算基准日
    pub as_of: NaiveDate,
    pub automation_levels: AutomationLevels,
    pub baseline: BaselineModel,
    pub optimizations: OptimizationSet,
    pub projections: Vec<MonthlyProjection>,
    pub break_even: BreakEvenAnalysis,
    pub period_summaries: Vec<ProjectionPeriodSummary>,
    pub summary: SimulationSummary,
}

// ==========================================
// QuickAdjustment - 快速调整 (what-if)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAdjustment {
    pub automation_levels: AutomationLevels,
    pub labor_annual_savings: f64,
    pub quality_annual_savings: f64,
    pub inventory_annual_savings: f64,
    pub service_annual_savings: f64,
    pub total_annual_savings: f64,
    pub total_implementation_cost: f64,
    pub overall_roi_year1: f64,
    pub break_even_month: Option<u32>,
    /// 前 6 个月预测
    pub preview: Vec<MonthlyProjection>,
}

impl QuickAdjustment {
    pub fn annual_savings_for(&self, category: AutomationCategory) -> f64 {
        match category {
            AutomationCategory::Labor => self.labor_annual_savings,
            AutomationCategory::Quality => self.quality_annual_savings,
            AutomationCategory::Inventory => self.inventory_annual_savings,
            AutomationCategory::Service => self.service_annual_savings,
        }
    }
}
