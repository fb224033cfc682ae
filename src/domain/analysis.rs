// ==========================================
// 制造业自动化投资仿真系统 - 盈亏平衡与 ROI 分析结果
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// RoiMetrics - 多期 ROI 指标
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    pub annual_roi: f64,
    pub three_year_roi: f64,
    pub five_year_roi: f64,
    /// 盈亏平衡月; 未达到时为 999
    pub payback_months: f64,
    pub break_even_date: Option<NaiveDate>,
    pub npv: f64,
}

// ==========================================
// BreakEvenAnalysis - 盈亏平衡分析
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenAnalysis {
    /// 累计现金流首次 ≥ 0 的月份
    pub break_even_month: Option<u32>,
    pub total_investment: f64,
    pub total_savings: f64,
    pub net_benefit: f64,
    pub roi_metrics: RoiMetrics,
    pub final_roi_percentage: f64,
    pub payback_achieved: bool,
    pub cumulative_cash_flow_final: f64,
    pub average_monthly_savings: f64,
}

impl BreakEvenAnalysis {
    pub fn is_break_even_reached(&self) -> bool {
        self.break_even_month.is_some()
    }
}

// ==========================================
// ProjectionPeriodSummary - 阶段汇总
// ==========================================
/// 30/60/90/180/365 天窗口的累计表现
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPeriodSummary {
    pub period_days: u32,
    pub months: u32,
    pub cumulative_savings: f64,
    pub investment_to_date: f64,
    pub net_benefit: f64,
    pub roi_percentage: f64,
    pub payback_achieved: bool,
    /// 窗口内的盈亏平衡月
    pub break_even_month: Option<u32>,
}
