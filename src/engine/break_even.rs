// ==========================================
// 制造业自动化投资仿真系统 - 盈亏平衡 / ROI 分析器
// ==========================================
// 职责: 月度预测 → 盈亏平衡月、多期 ROI、NPV、阶段汇总
// 红线: 只读取预测序列, 投入为 0 时所有 ROI 为 0
// ==========================================

use crate::config::AnalysisSettings;
use crate::domain::analysis::{BreakEvenAnalysis, ProjectionPeriodSummary, RoiMetrics};
use crate::domain::optimization::PAYBACK_SENTINEL_MONTHS;
use crate::domain::projection::MonthlyProjection;
use chrono::{Duration, NaiveDate};
use tracing::{debug, instrument};

/// 阶段汇总窗口 (天数, 月数)
const PERIOD_WINDOWS: [(u32, u32); 5] = [(30, 1), (60, 2), (90, 3), (180, 6), (365, 12)];

// ==========================================
// BreakEvenAnalyzer - 盈亏平衡分析器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct BreakEvenAnalyzer {
    settings: AnalysisSettings,
}

impl BreakEvenAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    /// 分析盈亏平衡
    ///
    /// # 参数
    /// - projections: 月度预测 (月份递增)
    /// - as_of: 盈亏平衡日期的计算基准日
    #[instrument(skip(self, projections), fields(months = projections.len()))]
    pub fn analyze(&self, projections: &[MonthlyProjection], as_of: NaiveDate) -> BreakEvenAnalysis {
        let Some(last) = projections.last() else {
            debug!("预测序列为空, 返回零值分析");
            return empty_analysis();
        };

        let break_even_month = first_break_even(projections);
        let total_investment = booked_investment(projections);
        let total_savings: f64 = projections.iter().map(|p| p.total_savings).sum();
        let average_monthly_savings = total_savings / projections.len() as f64;

        let annual_savings = savings_within(projections, 12);
        let three_year_savings = savings_within(projections, 36);
        let five_year_savings = if projections.len() >= 60 {
            savings_within(projections, 60)
        } else {
            average_monthly_savings * 60.0
        };

        let roi_metrics = RoiMetrics {
            annual_roi: roi(annual_savings, total_investment),
            three_year_roi: roi(three_year_savings, total_investment),
            five_year_roi: roi(five_year_savings, total_investment),
            payback_months: break_even_month.map_or(PAYBACK_SENTINEL_MONTHS, f64::from),
            break_even_date: break_even_month.and_then(|m| self.break_even_date(as_of, m)),
            npv: self.npv(projections),
        };

        BreakEvenAnalysis {
            break_even_month,
            total_investment,
            total_savings,
            net_benefit: total_savings - total_investment,
            roi_metrics,
            final_roi_percentage: last.roi_to_date,
            payback_achieved: break_even_month.is_some(),
            cumulative_cash_flow_final: last.cumulative_cash_flow,
            average_monthly_savings,
        }
    }

    /// 30/60/90/180/365 天窗口汇总, 仅包含预测期内的窗口
    pub fn summarize_periods(&self, projections: &[MonthlyProjection]) -> Vec<ProjectionPeriodSummary> {
        PERIOD_WINDOWS
            .iter()
            .filter(|(_, months)| (*months as usize) <= projections.len())
            .filter_map(|&(period_days, months)| {
                let window = &projections[..months as usize];
                let last = window.last()?;
                let investment_to_date = booked_investment(window);
                let net_benefit = last.cumulative_savings - investment_to_date;

                Some(ProjectionPeriodSummary {
                    period_days,
                    months,
                    cumulative_savings: last.cumulative_savings,
                    investment_to_date,
                    net_benefit,
                    roi_percentage: if investment_to_date > 0.0 {
                        net_benefit / investment_to_date * 100.0
                    } else {
                        0.0
                    },
                    payback_achieved: last.payback_achieved,
                    break_even_month: first_break_even(window),
                })
            })
            .collect()
    }

    /// 基准日 + days_per_month × 月数
    pub fn break_even_date(&self, as_of: NaiveDate, month: u32) -> Option<NaiveDate> {
        let days = i64::from(self.settings.days_per_month) * i64::from(month);
        as_of.checked_add_signed(Duration::days(days))
    }

    /// 按月折现的现金流净现值 (期初投入已计入各月现金流)
    pub fn npv(&self, projections: &[MonthlyProjection]) -> f64 {
        let monthly_rate = self.settings.annual_discount_rate / 12.0;
        projections
            .iter()
            .map(|p| p.monthly_cash_flow / (1.0 + monthly_rate).powi(p.month as i32))
            .sum()
    }
}

fn first_break_even(projections: &[MonthlyProjection]) -> Option<u32> {
    projections
        .iter()
        .find(|p| p.cumulative_cash_flow >= 0.0)
        .map(|p| p.month)
}

fn booked_investment(projections: &[MonthlyProjection]) -> f64 {
    projections
        .iter()
        .map(|p| p.implementation_cost)
        .filter(|cost| *cost > 0.0)
        .sum()
}

fn savings_within(projections: &[MonthlyProjection], months: usize) -> f64 {
    projections.iter().take(months).map(|p| p.total_savings).sum()
}

fn roi(horizon_savings: f64, investment: f64) -> f64 {
    if investment > 0.0 {
        (horizon_savings - investment) / investment * 100.0
    } else {
        0.0
    }
}

fn empty_analysis() -> BreakEvenAnalysis {
    BreakEvenAnalysis {
        break_even_month: None,
        total_investment: 0.0,
        total_savings: 0.0,
        net_benefit: 0.0,
        roi_metrics: RoiMetrics {
            annual_roi: 0.0,
            three_year_roi: 0.0,
            five_year_roi: 0.0,
            payback_months: PAYBACK_SENTINEL_MONTHS,
            break_even_date: None,
            npv: 0.0,
        },
        final_roi_percentage: 0.0,
        payback_achieved: false,
        cumulative_cash_flow_final: 0.0,
        average_monthly_savings: 0.0,
    }
}
