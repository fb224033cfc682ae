// ==========================================
// 完整仿真流程集成测试
// ==========================================
// 场景: 请求 → 基线 → 四类别优化 → 月度预测 → 盈亏平衡 → 报告
// ==========================================

mod test_helpers;

use chrono::Duration;
use mfg_automation_sim::api::{ApiError, SimulationApi};
use mfg_automation_sim::domain::{AutomationLevelsInput, OpportunityPotential, PAYBACK_SENTINEL_MONTHS};
use mfg_automation_sim::AutomationCategory;
use test_helpers::*;

// ==========================================
// 基准场景
// ==========================================

#[test]
fn test_reference_labor_figures() {
    let api = SimulationApi::default();
    let report = api.run_simulation_as_of(&reference_request(), as_of()).unwrap();
    let labor = &report.optimizations.labor;

    assert_close(labor.total_annual_savings, 133_500.0, "人工年节省");
    assert_close(labor.implementation_cost, 75_000.0, "人工实施成本");
    assert_close(labor.training_or_setup_cost, 100_000.0, "培训成本");
    assert_close(labor.net_savings_year1, -41_500.0, "首年净节省");
    assert!((labor.payback_months - 15.73).abs() < 0.01, "回本月数 {}", labor.payback_months);
    assert!((labor.roi_percentage - (-23.71)).abs() < 0.01, "ROI {}", labor.roi_percentage);
}

#[test]
fn test_projection_invariants() {
    let api = SimulationApi::default();
    let report = api.run_simulation_as_of(&reference_request(), as_of()).unwrap();
    let projections = &report.projections;
    let investment = report.summary.total_implementation_cost;

    assert_eq!(projections.len(), 24);

    // 投入只在前 6 个月等额扣除, 合计只计一次
    for p in &projections[..6] {
        assert_close(p.implementation_cost, investment / 6.0, "月度摊销");
    }
    assert!(projections[6..].iter().all(|p| p.implementation_cost == 0.0));
    let booked: f64 = projections.iter().map(|p| p.implementation_cost).sum();
    assert_close(booked, investment, "摊销合计");
    assert_close(report.break_even.total_investment, investment, "分析中的总投入");

    // 累计量逐月一致
    let mut cumulative = 0.0;
    for p in projections {
        cumulative += p.total_savings - p.implementation_cost;
        assert_close(p.cumulative_cash_flow, cumulative, "累计现金流");
        assert_close(
            p.total_savings,
            p.labor_savings + p.quality_savings + p.inventory_savings + p.service_savings,
            "月度节省合计",
        );
        assert_eq!(p.payback_achieved, p.cumulative_cash_flow >= 0.0);
    }
    let last = projections.last().unwrap();
    assert_close(last.cumulative_cash_flow, last.cumulative_savings - investment, "期末现金流");
}

#[test]
fn test_labor_ramp_shape() {
    let api = SimulationApi::default();
    let report = api.run_simulation_as_of(&reference_request(), as_of()).unwrap();
    let monthly = 133_500.0 / 12.0;

    // 人工: 实施 4 个月线性, 再 2 个月爬坡到 1.2 倍
    assert_close(report.projections[0].labor_savings, monthly * 0.25, "第1月");
    assert_close(report.projections[3].labor_savings, monthly, "第4月");
    assert_close(report.projections[4].labor_savings, monthly * 1.1, "第5月");
    assert_close(report.projections[5].labor_savings, monthly * 1.2, "第6月");
    assert_close(report.projections[23].labor_savings, monthly * 1.2, "第24月");
}

#[test]
fn test_break_even_consistency() {
    let api = SimulationApi::default();
    let report = api.run_simulation_as_of(&reference_request(), as_of()).unwrap();
    let analysis = &report.break_even;

    match analysis.break_even_month {
        Some(month) => {
            let idx = (month - 1) as usize;
            assert!(report.projections[idx].cumulative_cash_flow >= 0.0);
            assert!(report.projections[..idx].iter().all(|p| p.cumulative_cash_flow < 0.0));
            assert_eq!(
                analysis.roi_metrics.break_even_date,
                Some(as_of() + Duration::days(30 * i64::from(month)))
            );
            assert_eq!(analysis.roi_metrics.payback_months, f64::from(month));
            assert_eq!(report.summary.payback_months, Some(month));
        }
        None => {
            assert_eq!(analysis.roi_metrics.payback_months, PAYBACK_SENTINEL_MONTHS);
            assert_eq!(report.summary.payback_months, None);
        }
    }
    assert_eq!(report.period_summaries.len(), 5);
    assert_close(
        analysis.final_roi_percentage,
        report.projections.last().unwrap().roi_to_date,
        "期末 ROI",
    );
}

#[test]
fn test_short_horizon_spreads_over_horizon() {
    let api = SimulationApi::default();
    let request = reference_request().with_months(3);
    let report = api.run_simulation_as_of(&request, as_of()).unwrap();

    assert_eq!(report.projections.len(), 3);
    let booked: f64 = report.projections.iter().map(|p| p.implementation_cost).sum();
    assert_close(booked, report.summary.total_implementation_cost, "短期内投入仍只计一次");

    let days: Vec<u32> = report.period_summaries.iter().map(|s| s.period_days).collect();
    assert_eq!(days, vec![30, 60, 90]);
}

#[test]
fn test_zero_automation_produces_no_savings() {
    let api = SimulationApi::default();
    let request = reference_request().with_levels(uniform_levels(0.0));
    let report = api.run_simulation_as_of(&request, as_of()).unwrap();

    assert_eq!(report.summary.total_annual_savings, 0.0);
    assert!(report.projections.iter().all(|p| p.total_savings == 0.0));
    for result in report.optimizations.iter() {
        assert_eq!(result.payback_months, PAYBACK_SENTINEL_MONTHS);
    }
    assert!(report.break_even.roi_metrics.annual_roi.is_finite());
}

// ==========================================
// 快速调整
// ==========================================

#[test]
fn test_adjust_matches_full_run_preview() {
    let api = SimulationApi::default();
    let levels = uniform_levels(0.7);
    let report = api
        .run_simulation_as_of(&reference_request().with_levels(levels), as_of())
        .unwrap();

    let adjustment = api.adjust(&report.baseline, &levels).unwrap();

    assert_close(adjustment.total_annual_savings, report.summary.total_annual_savings, "年节省");
    assert_close(
        adjustment.total_implementation_cost,
        report.summary.total_implementation_cost,
        "一次性投入",
    );
    assert_eq!(adjustment.preview.len(), 6);
    assert_eq!(adjustment.preview[..], report.projections[..6]);
    for category in AutomationCategory::ALL {
        assert_close(
            adjustment.annual_savings_for(category),
            report.optimizations.get(category).total_annual_savings,
            category.as_str(),
        );
    }
}

// ==========================================
// 画像与问卷分析
// ==========================================

#[test]
fn test_size_insight_overrides_headcount() {
    let api = SimulationApi::default();
    let plain = api.build_baseline(&reference_financial(), &reference_profile());
    let large = api.build_baseline(
        &reference_financial(),
        &ProfileBuilder::new().size_category("large").build(),
    );

    assert_eq!(plain.employee_count(), 100);
    assert_eq!(large.employee_count(), 350);

    let plain_labor = api.calculate_labor(&plain, 0.5).unwrap();
    let large_labor = api.calculate_labor(&large, 0.5).unwrap();
    assert!(large_labor.training_or_setup_cost > plain_labor.training_or_setup_cost);
}

#[test]
fn test_unrecognized_profile_falls_back() {
    let api = SimulationApi::default();
    let baseline = api.build_baseline(
        &reference_financial(),
        &ProfileBuilder::new()
            .volume("lots")
            .employees("a few")
            .automation("unsure")
            .build(),
    );

    assert_eq!(baseline.production_volume(), 500_000);
    assert_eq!(baseline.employee_count(), 25);
    assert_eq!(baseline.operations.automation_maturity.automated_share, 0.15);
    assert_eq!(baseline.manufacturing_metrics.first_pass_yield, 0.88);
}

#[test]
fn test_opportunity_insights_do_not_break_run() {
    let api = SimulationApi::default();
    let profile = ProfileBuilder::new()
        .annual_volume("1.5M units/year")
        .quality_loss("10-20%")
        .opportunity(AutomationCategory::Quality, OpportunityPotential::High)
        .build();
    let request = mfg_automation_sim::SimulationRequest::new(reference_financial(), profile);

    let report = api.run_simulation_as_of(&request, as_of()).unwrap();
    assert_eq!(report.baseline.production_volume(), 1_500_000);
    assert_close(report.baseline.operations.quality_loss_rate, 0.15, "质量损失率");
}

// ==========================================
// 调用方契约
// ==========================================

#[test]
fn test_invalid_requests_are_rejected() {
    let api = SimulationApi::default();

    let bad_level = reference_request().with_levels(AutomationLevelsInput {
        service: Some(1.5),
        ..Default::default()
    });
    assert!(matches!(
        api.run_simulation_as_of(&bad_level, as_of()),
        Err(ApiError::InvalidAutomationLevel {
            category: AutomationCategory::Service,
            ..
        })
    ));

    for months in [0, 121] {
        assert!(matches!(
            api.run_simulation_as_of(&reference_request().with_months(months), as_of()),
            Err(ApiError::InvalidHorizon { max: 120, .. })
        ));
    }
}
