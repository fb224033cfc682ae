// ==========================================
// 制造业自动化投资仿真系统 - 基线模型
// ==========================================
// 两步构建: 解析画像 → OperationalProfile; 成本拆分 → CostBreakdown
// 红线: 每次仿真请求创建一次, 之后只读
// ==========================================

use crate::domain::cost_breakdown::CostBreakdown;
use crate::domain::financial::FinancialAggregates;
use serde::{Deserialize, Serialize};

// ==========================================
// AutomationMaturity - 当前自动化成熟度
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationMaturity {
    /// 原始答案 (描述性文字或百分比)
    pub label: String,
    /// 估计的已自动化比例 ∈ [0, 1]
    pub automated_share: f64,
}

// ==========================================
// OperationalProfile - 数值化运营画像
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalProfile {
    /// 年产量 (件)
    pub production_volume: u64,
    pub employee_count: u32,
    pub automation_maturity: AutomationMaturity,
    /// 质量损失率 (问卷分析提供, 默认 15%)
    pub quality_loss_rate: f64,
}

// ==========================================
// ManufacturingMetrics - 运营指标估计
// ==========================================
/// 描述性运营指标, 不参与节省额计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingMetrics {
    // 生产
    pub units_per_hour: f64,
    pub setup_time_hours: f64,
    pub changeover_time_hours: f64,

    // 质量
    pub first_pass_yield: f64,
    pub rework_rate: f64,
    pub scrap_rate: f64,

    // 人工
    pub direct_labor_hours_per_unit: f64,
    pub indirect_labor_ratio: f64,
    pub overtime_percentage: f64,
    pub labor_utilization: f64,

    // 库存 (天)
    pub raw_material_days: f64,
    pub wip_days: f64,
    pub finished_goods_days: f64,
    pub safety_stock_percentage: f64,

    // 客服
    pub order_processing_time_hours: f64,
    pub inquiry_response_time_hours: f64,
    pub service_agent_capacity_per_day: u32,
}

impl Default for ManufacturingMetrics {
    fn default() -> Self {
        Self {
            units_per_hour: 100.0,
            setup_time_hours: 2.0,
            changeover_time_hours: 1.5,

            first_pass_yield: 0.95,
            rework_rate: 0.03,
            scrap_rate: 0.02,

            direct_labor_hours_per_unit: 0.5,
            indirect_labor_ratio: 0.3,
            overtime_percentage: 0.10,
            labor_utilization: 0.85,

            raw_material_days: 30.0,
            wip_days: 15.0,
            finished_goods_days: 45.0,
            safety_stock_percentage: 0.20,

            order_processing_time_hours: 4.0,
            inquiry_response_time_hours: 24.0,
            service_agent_capacity_per_day: 50,
        }
    }
}

// ==========================================
// BaselineModel - 基线模型
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineModel {
    pub financials: FinancialAggregates,
    pub operations: OperationalProfile,
    pub manufacturing_metrics: ManufacturingMetrics,
    pub cost_breakdown: CostBreakdown,
}

impl BaselineModel {
    pub fn new(
        financials: FinancialAggregates,
        operations: OperationalProfile,
        manufacturing_metrics: ManufacturingMetrics,
        cost_breakdown: CostBreakdown,
    ) -> Self {
        Self {
            financials,
            operations,
            manufacturing_metrics,
            cost_breakdown,
        }
    }

    pub fn revenue(&self) -> f64 {
        self.financials.revenue
    }

    pub fn cogs(&self) -> f64 {
        self.financials.cogs
    }

    pub fn employee_count(&self) -> u32 {
        self.operations.employee_count
    }

    pub fn production_volume(&self) -> u64 {
        self.operations.production_volume
    }
}
