// ==========================================
// 制造业自动化投资仿真系统 - 文本报告
// ==========================================
// 职责: 将仿真报告 / 快速调整结果渲染为本地化文本
// 红线: 只做展示, 不重新计算任何数值
// ==========================================

use std::fmt::Write;

use crate::domain::analysis::ProjectionPeriodSummary;
use crate::domain::simulation::{QuickAdjustment, SimulationReport};
use crate::domain::types::AutomationCategory;
use crate::i18n::{t, t_with_args};

const RULE: &str = "==================================================";

/// 类别的本地化名称
pub fn category_label(category: AutomationCategory) -> String {
    t(&format!("category.{}", category.as_str()))
}

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

fn percent(value: f64) -> String {
    format!("{:.1}", value)
}

/// 渲染完整仿真报告
pub fn render_report(report: &SimulationReport) -> String {
    let mut out = String::new();
    let id = report.simulation_id.to_string();
    let as_of = report.as_of.to_string();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{}", t("report.title"));
    let _ = writeln!(out, "{}", t_with_args("report.simulation_id", &[("id", &id)]));
    let _ = writeln!(out, "{}", t_with_args("report.as_of", &[("date", &as_of)]));
    let _ = writeln!(out, "{}", RULE);

    // 基线与各类别优化
    let _ = writeln!(out, "{}", t("report.categories_header"));
    for category in AutomationCategory::ALL {
        let result = report.optimizations.get(category);
        let current = report.baseline.cost_breakdown.category_total(category);
        let level = percent(result.automation_level.value() * 100.0);
        let current = money(current);
        let savings = money(result.total_annual_savings);
        let one_time = money(result.total_one_time_cost);
        let payback = format!("{:.1}", result.payback_months);
        let _ = writeln!(
            out,
            "  {}",
            t_with_args(
                "report.category_line",
                &[
                    ("category", &category_label(category)),
                    ("level", &level),
                    ("current", &current),
                    ("savings", &savings),
                    ("one_time", &one_time),
                    ("payback", &payback),
                ],
            )
        );
    }

    // 汇总
    let summary = &report.summary;
    let _ = writeln!(out, "{}", t("report.summary_header"));
    let rows = [
        ("report.total_current_costs", money(summary.total_current_costs)),
        ("report.total_optimized_costs", money(summary.total_optimized_costs)),
        ("report.total_annual_savings", money(summary.total_annual_savings)),
        ("report.total_implementation_cost", money(summary.total_implementation_cost)),
        ("report.roi_percentage", percent(summary.roi_percentage)),
        ("report.npv", money(report.break_even.roi_metrics.npv)),
    ];
    for (key, value) in rows {
        let _ = writeln!(out, "  {}", t_with_args(key, &[("value", &value)]));
    }

    let break_even_line = match (report.break_even.break_even_month, report.break_even.roi_metrics.break_even_date) {
        (Some(month), Some(date)) => t_with_args(
            "report.break_even_reached",
            &[("month", &month.to_string()), ("date", &date.to_string())],
        ),
        (Some(month), None) => t_with_args(
            "report.break_even_reached",
            &[("month", &month.to_string()), ("date", "-")],
        ),
        (None, _) => t_with_args(
            "report.break_even_not_reached",
            &[("months", &report.projections.len().to_string())],
        ),
    };
    let _ = writeln!(out, "  {}", break_even_line);

    if !report.period_summaries.is_empty() {
        let _ = writeln!(out, "{}", t("report.periods_header"));
        for period in &report.period_summaries {
            let _ = writeln!(out, "  {}", render_period(period));
        }
    }

    out
}

fn render_period(period: &ProjectionPeriodSummary) -> String {
    let status = if period.payback_achieved {
        t("report.status_paid_back")
    } else {
        t("report.status_pending")
    };
    t_with_args(
        "report.period_line",
        &[
            ("days", &period.period_days.to_string()),
            ("savings", &money(period.cumulative_savings)),
            ("net", &money(period.net_benefit)),
            ("roi", &percent(period.roi_percentage)),
            ("status", &status),
        ],
    )
}

/// 渲染快速调整结果
pub fn render_adjustment(adjustment: &QuickAdjustment) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", t("adjust.title"));
    for category in AutomationCategory::ALL {
        let level = percent(adjustment.automation_levels.get(category).value() * 100.0);
        let savings = money(adjustment.annual_savings_for(category));
        let _ = writeln!(
            out,
            "  {}",
            t_with_args(
                "adjust.category_line",
                &[
                    ("category", &category_label(category)),
                    ("level", &level),
                    ("savings", &savings),
                ],
            )
        );
    }
    let total = money(adjustment.total_annual_savings);
    let cost = money(adjustment.total_implementation_cost);
    let roi = percent(adjustment.overall_roi_year1);
    let _ = writeln!(out, "  {}", t_with_args("report.total_annual_savings", &[("value", &total)]));
    let _ = writeln!(out, "  {}", t_with_args("report.total_implementation_cost", &[("value", &cost)]));
    let _ = writeln!(out, "  {}", t_with_args("adjust.roi_year1", &[("value", &roi)]));
    let break_even = match adjustment.break_even_month {
        Some(month) => t_with_args("adjust.break_even_month", &[("month", &month.to_string())]),
        None => t("adjust.break_even_beyond_window"),
    };
    let _ = writeln!(out, "  {}", break_even);
    out
}
