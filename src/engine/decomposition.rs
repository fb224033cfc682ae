// ==========================================
// 制造业自动化投资仿真系统 - 成本拆分引擎
// ==========================================
// 职责: 4 个 P&L 汇总 → 15 个明细成本科目
// 输入: FinancialAggregates
// 输出: CostBreakdown
// 红线: 无错误分支, 0 输入 → 0 输出
// ==========================================

use crate::config::DecompositionRatios;
use crate::domain::cost_breakdown::CostBreakdown;
use crate::domain::financial::FinancialAggregates;
use tracing::instrument;

// ==========================================
// CostDecomposer - 成本拆分器
// ==========================================
#[derive(Debug, Clone)]
pub struct CostDecomposer {
    ratios: DecompositionRatios,
}

impl Default for CostDecomposer {
    fn default() -> Self {
        Self::new(DecompositionRatios::default())
    }
}

impl CostDecomposer {
    pub fn new(ratios: DecompositionRatios) -> Self {
        Self { ratios }
    }

    pub fn ratios(&self) -> &DecompositionRatios {
        &self.ratios
    }

    /// 按固定比例拆分成本
    ///
    /// # 规则
    /// - 人工: labor_costs 按 直接/间接/加班/福利 拆分
    /// - 质量: cogs 的质量相关部分按 返工/报废/检验/保修 拆分
    /// - 库存: overhead 的库存部分按 持有/仓储/呆滞/保险 拆分
    /// - 客服: overhead 的客服部分按 坐席/系统/培训 拆分
    #[instrument(skip(self), fields(revenue = aggregates.revenue))]
    pub fn decompose(&self, aggregates: &FinancialAggregates) -> CostBreakdown {
        let r = &self.ratios;

        let labor = aggregates.labor_costs;
        let quality_pool = aggregates.cogs * r.quality_share_of_cogs;
        let inventory_pool = aggregates.overhead_costs * r.inventory_share_of_overhead;
        let service_pool = aggregates.overhead_costs * r.service_share_of_overhead;

        CostBreakdown {
            direct_labor_cost: labor * r.direct_labor_share,
            indirect_labor_cost: labor * r.indirect_labor_share,
            overtime_cost: labor * r.overtime_share,
            benefits_cost: labor * r.benefits_share,

            rework_cost: quality_pool * r.rework_share,
            scrap_cost: quality_pool * r.scrap_share,
            inspection_cost: quality_pool * r.inspection_share,
            warranty_cost: quality_pool * r.warranty_share,

            carrying_cost: inventory_pool * r.carrying_share,
            storage_cost: inventory_pool * r.storage_share,
            obsolescence_cost: inventory_pool * r.obsolescence_share,
            insurance_cost: inventory_pool * r.insurance_share,

            agent_salaries: service_pool * r.agent_salary_share,
            system_costs: service_pool * r.system_cost_share,
            training_costs: service_pool * r.service_training_share,
        }
    }
}
