// ==========================================
// 制造业自动化投资仿真系统 - 因子配置
// ==========================================
// 职责: 成本拆分比例 + 四类优化因子 + 预测/分析参数
// 红线: 因子为不可变值对象,构造时注入引擎,不存在全局可变字典
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 成本拆分比例 (Cost Decomposition Ratios)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecompositionRatios {
    // 人工成本 (labor_costs 拆分)
    pub direct_labor_share: f64,
    pub indirect_labor_share: f64,
    pub overtime_share: f64,
    pub benefits_share: f64,

    // 质量成本 (COGS 中质量相关部分)
    pub quality_share_of_cogs: f64,
    pub rework_share: f64,
    pub scrap_share: f64,
    pub inspection_share: f64,
    pub warranty_share: f64,

    // 库存成本 (overhead 中库存相关部分)
    pub inventory_share_of_overhead: f64,
    pub carrying_share: f64,
    pub storage_share: f64,
    pub obsolescence_share: f64,
    pub insurance_share: f64,

    // 客服成本 (overhead 中客服相关部分)
    pub service_share_of_overhead: f64,
    pub agent_salary_share: f64,
    pub system_cost_share: f64,
    pub service_training_share: f64,
}

impl Default for DecompositionRatios {
    fn default() -> Self {
        Self {
            direct_labor_share: 0.70,
            indirect_labor_share: 0.20,
            overtime_share: 0.05,
            benefits_share: 0.05,

            quality_share_of_cogs: 0.15,
            rework_share: 0.40,
            scrap_share: 0.30,
            inspection_share: 0.20,
            warranty_share: 0.10,

            inventory_share_of_overhead: 0.25,
            carrying_share: 0.60,
            storage_share: 0.25,
            obsolescence_share: 0.10,
            insurance_share: 0.05,

            service_share_of_overhead: 0.10,
            agent_salary_share: 0.70,
            system_cost_share: 0.20,
            service_training_share: 0.10,
        }
    }
}

// ==========================================
// 实施/爬坡窗口 (Ramp Window)
// ==========================================
/// 实施期内收益由 0 线性爬升到 1,爬坡期内继续爬升到 1 + 全面采纳奖励
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampWindow {
    pub implementation_months: u32,
    pub ramp_months: u32,
}

impl RampWindow {
    pub const fn new(implementation_months: u32, ramp_months: u32) -> Self {
        Self {
            implementation_months,
            ramp_months,
        }
    }

    /// 达到满额收益的月份 (溢出时饱和到 u32::MAX)
    pub fn saturation_month(&self) -> u32 {
        self.implementation_months.saturating_add(self.ramp_months)
    }
}

// ==========================================
// 人工优化因子 (Labor)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborFactors {
    /// 生产率提升 (作用于直接人工)
    pub productivity_gain: f64,
    /// 差错减少 (按权重作用于间接人工)
    pub error_reduction: f64,
    pub indirect_error_weight: f64,
    /// 加班减少
    pub overtime_reduction: f64,

    // 企业规模调整
    pub large_company_threshold: u32,
    pub small_company_threshold: u32,
    pub large_company_savings_multiplier: f64,
    pub small_company_savings_multiplier: f64,
    pub large_company_implementation_rate: f64,
    pub medium_company_implementation_rate: f64,
    pub small_company_implementation_rate: f64,

    // 培训成本 (每人)
    pub small_workforce_threshold: u32,
    pub small_workforce_training_cost: f64,
    pub training_cost_per_employee: f64,

    pub ramp: RampWindow,
}

impl Default for LaborFactors {
    fn default() -> Self {
        Self {
            productivity_gain: 0.25,
            error_reduction: 0.30,
            indirect_error_weight: 0.5,
            overtime_reduction: 0.35,

            large_company_threshold: 200,
            small_company_threshold: 25,
            large_company_savings_multiplier: 1.15,
            small_company_savings_multiplier: 0.85,
            large_company_implementation_rate: 0.025,
            medium_company_implementation_rate: 0.03,
            small_company_implementation_rate: 0.04,

            small_workforce_threshold: 50,
            small_workforce_training_cost: 1_500.0,
            training_cost_per_employee: 2_000.0,

            ramp: RampWindow::new(4, 2),
        }
    }
}

// ==========================================
// 质量优化因子 (Quality)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityFactors {
    /// 缺陷减少 (保修全额, 检验按权重)
    pub defect_reduction: f64,
    pub inspection_defect_weight: f64,
    pub rework_reduction: f64,
    pub scrap_reduction: f64,

    // 产量调整 (年产量, 件)
    pub high_volume_threshold: u64,
    pub low_volume_threshold: u64,
    pub high_volume_savings_multiplier: f64,
    pub low_volume_savings_multiplier: f64,
    pub high_volume_system_rate: f64,
    pub standard_system_rate: f64,
    pub low_volume_system_rate: f64,

    pub training_cost_per_employee: f64,

    pub ramp: RampWindow,
}

impl Default for QualityFactors {
    fn default() -> Self {
        Self {
            defect_reduction: 0.50,
            inspection_defect_weight: 0.3,
            rework_reduction: 0.60,
            scrap_reduction: 0.40,

            high_volume_threshold: 1_000_000,
            low_volume_threshold: 100_000,
            high_volume_savings_multiplier: 1.2,
            low_volume_savings_multiplier: 0.8,
            high_volume_system_rate: 0.015,
            standard_system_rate: 0.02,
            low_volume_system_rate: 0.025,

            training_cost_per_employee: 1_200.0,

            ramp: RampWindow::new(6, 4),
        }
    }
}

// ==========================================
// 库存优化因子 (Inventory)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryFactors {
    /// 周转提升 (仓储按权重, 同时释放营运资金)
    pub turnover_improvement: f64,
    pub storage_turnover_weight: f64,
    pub carrying_cost_reduction: f64,
    pub obsolescence_reduction: f64,

    // 营运资金收益
    pub inventory_share_of_cogs: f64,
    pub cost_of_capital: f64,

    pub system_cost_rate: f64,
    pub training_cost_per_employee: f64,

    pub ramp: RampWindow,
}

impl Default for InventoryFactors {
    fn default() -> Self {
        Self {
            turnover_improvement: 0.20,
            storage_turnover_weight: 0.5,
            carrying_cost_reduction: 0.20,
            obsolescence_reduction: 0.25,

            inventory_share_of_cogs: 0.25,
            cost_of_capital: 0.08,

            system_cost_rate: 0.015,
            training_cost_per_employee: 1_000.0,

            ramp: RampWindow::new(3, 2),
        }
    }
}

// ==========================================
// 客服自动化因子 (Service)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceFactors {
    /// 自动化处理比例 (其中仅按权重节省坐席时间)
    pub automation_rate: f64,
    pub automated_agent_weight: f64,
    pub agent_productivity_gain: f64,
    pub cost_per_interaction_reduction: f64,

    pub platform_cost_rate: f64,
    pub base_setup_cost: f64,

    pub ramp: RampWindow,
}

impl Default for ServiceFactors {
    fn default() -> Self {
        Self {
            automation_rate: 0.60,
            automated_agent_weight: 0.6,
            agent_productivity_gain: 0.40,
            cost_per_interaction_reduction: 0.50,

            platform_cost_rate: 0.01,
            base_setup_cost: 50_000.0,

            ramp: RampWindow::new(2, 1),
        }
    }
}

// ==========================================
// 月度预测参数 (Projection)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    /// 一次性投入在前 N 个月平均摊销
    pub implementation_spread_months: u32,
    /// 爬坡结束后的全面采纳奖励 (0.2 = 额外 20%)
    pub full_adoption_bonus: f64,
    /// 请求未指定某类自动化水平时的默认值
    pub default_automation_level: f64,
    pub max_horizon_months: u32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            implementation_spread_months: 6,
            full_adoption_bonus: 0.2,
            default_automation_level: 0.5,
            max_horizon_months: 120,
        }
    }
}

// ==========================================
// 盈亏平衡分析参数 (Analysis)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// NPV 年折现率
    pub annual_discount_rate: f64,
    /// 盈亏平衡日期换算 (每月天数)
    pub days_per_month: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            annual_discount_rate: 0.08,
            days_per_month: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposition_groups_sum_to_one() {
        let r = DecompositionRatios::default();
        let labor = r.direct_labor_share + r.indirect_labor_share + r.overtime_share + r.benefits_share;
        let quality = r.rework_share + r.scrap_share + r.inspection_share + r.warranty_share;
        let inventory = r.carrying_share + r.storage_share + r.obsolescence_share + r.insurance_share;
        let service = r.agent_salary_share + r.system_cost_share + r.service_training_share;

        for (name, sum) in [("labor", labor), ("quality", quality), ("inventory", inventory), ("service", service)] {
            assert!((sum - 1.0).abs() < 1e-12, "{} 组比例之和应为1, 实际 {}", name, sum);
        }
    }

    #[test]
    fn test_default_ramp_windows() {
        assert_eq!(LaborFactors::default().ramp, RampWindow::new(4, 2));
        assert_eq!(QualityFactors::default().ramp, RampWindow::new(6, 4));
        assert_eq!(InventoryFactors::default().ramp, RampWindow::new(3, 2));
        assert_eq!(ServiceFactors::default().ramp, RampWindow::new(2, 1));
        assert_eq!(QualityFactors::default().ramp.saturation_month(), 10);
    }

    #[test]
    fn test_saturation_month_saturates() {
        assert_eq!(RampWindow::new(u32::MAX, 2).saturation_month(), u32::MAX);
        assert_eq!(RampWindow::new(0, 0).saturation_month(), 0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let labor: LaborFactors = serde_json::from_str(r#"{"productivity_gain": 0.4}"#).unwrap();
        assert_eq!(labor.productivity_gain, 0.4);
        assert_eq!(labor.overtime_reduction, 0.35);
        assert_eq!(labor.ramp, RampWindow::new(4, 2));
    }
}
