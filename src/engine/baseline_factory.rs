// ==========================================
// 制造业自动化投资仿真系统 - 基线工厂
// ==========================================
// 职责: 问卷画像 + P&L 汇总 → BaselineModel
// 步骤: (1) 解析画像 → OperationalProfile  (2) 成本拆分 → CostBreakdown
// 红线: 永不失败, 未识别选项回落默认值并记录 debug 日志
// ==========================================

use crate::domain::baseline::{AutomationMaturity, BaselineModel, ManufacturingMetrics, OperationalProfile};
use crate::domain::financial::{CompanyProfile, FinancialAggregates, QuestionnaireInsights};
use crate::domain::types::{AutomationCategory, OpportunityPotential};
use crate::engine::bucket_table::{parse_percentage, BucketTable};
use crate::engine::decomposition::CostDecomposer;
use tracing::{debug, info, instrument};

/// 年工作日
const WORKING_DAYS_PER_YEAR: u64 = 250;

/// 默认质量损失率
const DEFAULT_QUALITY_LOSS_RATE: f64 = 0.15;

/// 无法识别自动化现状 (无描述档、无数字) 时的估计比例
const DEFAULT_AUTOMATED_SHARE: f64 = 0.15;

// ==========================================
// 映射表
// ==========================================

/// 日产量选项 (件/天), 含通用问卷与金属件问卷两套选项
const DAILY_VOLUME_TABLE: BucketTable<u64> = BucketTable::new(
    "daily_volume",
    &[
        ("<100", 50),
        ("under", 50),
        ("100-1000", 500),
        ("1000-10000", 5_000),
        (">10000", 15_000),
        ("10000+", 15_000),
        ("over", 15_000),
        ("<50", 25),
        ("50-500", 250),
        ("500-5000", 2_500),
        (">5000", 7_500),
        ("5000+", 7_500),
    ],
    0,
);

/// 日产量无法识别时的年产量
const DEFAULT_ANNUAL_VOLUME: u64 = 500_000;

/// 问卷分析给出的年产量
const ANNUAL_VOLUME_TABLE: BucketTable<u64> = BucketTable::new(
    "annual_volume",
    &[
        ("25,000", 25_000),
        ("25000", 25_000),
        ("75,000", 75_000),
        ("75000", 75_000),
        ("375,000", 375_000),
        ("375000", 375_000),
        ("1.5m", 1_500_000),
        ("1,500,000", 1_500_000),
        ("1500000", 1_500_000),
        ("7.5m", 7_500_000),
        ("7,500,000", 7_500_000),
        ("7500000", 7_500_000),
        ("15m", 15_000_000),
        ("15,000,000", 15_000_000),
        ("15000000", 15_000_000),
    ],
    250_000,
);

/// 员工数选项 (人数区间或规模档)
const HEADCOUNT_TABLE: BucketTable<u32> = BucketTable::new(
    "headcount",
    &[
        ("1-10", 5),
        ("11-50", 25),
        ("51-200", 100),
        ("200+", 300),
        ("over", 300),
        ("small", 15),
        ("medium", 75),
        ("large", 350),
    ],
    25,
);

/// 问卷分析的规模档
const SIZE_TIER_TABLE: BucketTable<u32> = BucketTable::new(
    "size_tier",
    &[("small", 15), ("medium", 75), ("large", 350)],
    75,
);

/// 自动化现状描述 → 已自动化比例
const MATURITY_TABLE: BucketTable<f64> = BucketTable::new(
    "automation_maturity",
    &[
        ("fullymanual", 0.05),
        ("someautomated", 0.15),
        ("partiallyautomated", 0.35),
        ("highlyautomated", 0.65),
        ("fullyautomated", 0.90),
    ],
    DEFAULT_AUTOMATED_SHARE,
);

// ==========================================
// BaselineFactory - 基线工厂
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct BaselineFactory {
    decomposer: CostDecomposer,
}

impl BaselineFactory {
    pub fn new(decomposer: CostDecomposer) -> Self {
        Self { decomposer }
    }

    /// 构建基线模型
    ///
    /// # 参数
    /// - financial: P&L 汇总
    /// - profile: 企业画像 (可含问卷分析)
    ///
    /// # 返回
    /// - BaselineModel: 永不失败
    #[instrument(skip(self, financial, profile), fields(revenue = financial.revenue))]
    pub fn build(&self, financial: &FinancialAggregates, profile: &CompanyProfile) -> BaselineModel {
        let operations = self.resolve_profile(profile);
        let manufacturing_metrics = estimate_manufacturing_metrics(&operations, profile.insights.as_ref());
        let cost_breakdown = self.decomposer.decompose(financial);

        info!(
            revenue = financial.revenue,
            production_volume = operations.production_volume,
            employee_count = operations.employee_count,
            "基线模型已创建"
        );

        BaselineModel::new(*financial, operations, manufacturing_metrics, cost_breakdown)
    }

    /// 解析画像为数值
    ///
    /// 问卷分析字段存在时优先于粗粒度选项
    pub fn resolve_profile(&self, profile: &CompanyProfile) -> OperationalProfile {
        let insights = profile.insights.as_ref();

        let production_volume = match insights.and_then(|i| i.production_volume_annual.as_deref()) {
            Some(answer) => lookup_logged(&ANNUAL_VOLUME_TABLE, answer),
            None => parse_daily_volume(&profile.production_volume),
        };

        let employee_count = match insights.and_then(|i| i.size_category.as_deref()) {
            Some(answer) => lookup_logged(&SIZE_TIER_TABLE, answer),
            None => lookup_logged(&HEADCOUNT_TABLE, &profile.employee_count),
        };

        let maturity_label = insights
            .and_then(|i| i.automation_percentage.clone())
            .unwrap_or_else(|| profile.automation_level.clone());
        let automation_maturity = parse_maturity(&maturity_label);

        let quality_loss_rate = insights
            .and_then(|i| i.quality_loss_percentage.as_deref())
            .and_then(parse_percentage)
            .unwrap_or(DEFAULT_QUALITY_LOSS_RATE);

        OperationalProfile {
            production_volume,
            employee_count,
            automation_maturity,
            quality_loss_rate,
        }
    }
}

fn lookup_logged<T: Copy + std::fmt::Debug + 'static>(table: &BucketTable<T>, answer: &str) -> T {
    match table.find(answer) {
        Some(value) => value,
        None => {
            let fallback = table.default_value();
            debug!(table = table.name(), answer, fallback = ?fallback, "未识别的问卷选项, 使用默认值");
            fallback
        }
    }
}

/// 日产量选项 → 年产量
fn parse_daily_volume(answer: &str) -> u64 {
    match DAILY_VOLUME_TABLE.find(answer) {
        Some(daily) => daily * WORKING_DAYS_PER_YEAR,
        None => {
            debug!(answer, fallback = DEFAULT_ANNUAL_VOLUME, "未识别的产量选项, 使用默认年产量");
            DEFAULT_ANNUAL_VOLUME
        }
    }
}

/// 自动化现状: 描述性选项优先, 其次百分比, 否则 15%
fn parse_maturity(label: &str) -> AutomationMaturity {
    let automated_share = MATURITY_TABLE
        .find(label)
        .or_else(|| parse_percentage(label).map(|share| share.clamp(0.0, 1.0)))
        .unwrap_or_else(|| {
            debug!(answer = label, fallback = DEFAULT_AUTOMATED_SHARE, "未识别的自动化现状, 使用默认比例");
            DEFAULT_AUTOMATED_SHARE
        });

    AutomationMaturity {
        label: label.to_string(),
        automated_share,
    }
}

/// 估计描述性运营指标
///
/// 有问卷分析时按机会潜力偏置质量与人工指标, 否则按已自动化比例
pub fn estimate_manufacturing_metrics(
    operations: &OperationalProfile,
    insights: Option<&QuestionnaireInsights>,
) -> ManufacturingMetrics {
    let mut metrics = ManufacturingMetrics::default();
    let loss = operations.quality_loss_rate;

    match insights {
        Some(insights) => {
            match insights.potential(AutomationCategory::Quality) {
                OpportunityPotential::High => {
                    metrics.first_pass_yield = 0.85;
                    metrics.rework_rate = loss * 0.6;
                    metrics.scrap_rate = loss * 0.4;
                }
                OpportunityPotential::Low => {
                    metrics.first_pass_yield = 0.95;
                    metrics.rework_rate = 0.02;
                    metrics.scrap_rate = 0.01;
                }
                OpportunityPotential::Medium => {
                    metrics.first_pass_yield = 0.90;
                    metrics.rework_rate = loss * 0.7;
                    metrics.scrap_rate = loss * 0.3;
                }
            }

            match insights.potential(AutomationCategory::Labor) {
                OpportunityPotential::High => {
                    metrics.labor_utilization = 0.75;
                    metrics.overtime_percentage = 0.15;
                }
                OpportunityPotential::Low => {
                    metrics.labor_utilization = 0.90;
                    metrics.overtime_percentage = 0.05;
                }
                OpportunityPotential::Medium => {
                    metrics.labor_utilization = 0.82;
                    metrics.overtime_percentage = 0.10;
                }
            }
        }
        None => {
            let share = operations.automation_maturity.automated_share;
            if share < 0.20 {
                metrics.first_pass_yield = 0.88;
                metrics.rework_rate = 0.06;
                metrics.labor_utilization = 0.75;
            } else if share > 0.60 {
                metrics.first_pass_yield = 0.96;
                metrics.rework_rate = 0.02;
                metrics.labor_utilization = 0.88;
            }
        }
    }

    // 产量规模
    if operations.production_volume > 1_000_000 {
        metrics.units_per_hour = 300.0;
        metrics.setup_time_hours = 0.5;
    } else if operations.production_volume < 100_000 {
        metrics.units_per_hour = 25.0;
        metrics.setup_time_hours = 6.0;
    } else {
        metrics.units_per_hour = 100.0;
        metrics.setup_time_hours = 2.0;
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn factory() -> BaselineFactory {
        BaselineFactory::default()
    }

    fn profile(volume: &str, employees: &str, automation: &str) -> CompanyProfile {
        CompanyProfile::new(volume, employees, automation)
    }

    // ==========================================
    // 产量选项
    // ==========================================

    #[test]
    fn test_daily_volume_buckets() {
        assert_eq!(parse_daily_volume("< 100 units/day"), 12_500);
        assert_eq!(parse_daily_volume("100-1000 units/day"), 125_000);
        assert_eq!(parse_daily_volume("1000-10000 units/day"), 1_250_000);
        assert_eq!(parse_daily_volume("> 10000 units/day"), 3_750_000);
        assert_eq!(parse_daily_volume("10000+ units/day"), 3_750_000);
        assert_eq!(parse_daily_volume("Under 100 units"), 12_500);
    }

    #[test]
    fn test_metal_parts_volume_buckets() {
        assert_eq!(parse_daily_volume("< 50 units/day"), 6_250);
        assert_eq!(parse_daily_volume("50-500 units/day"), 62_500);
        assert_eq!(parse_daily_volume("500-5000 units/day"), 625_000);
        assert_eq!(parse_daily_volume("> 5000 units/day"), 1_875_000);
    }

    #[test]
    fn test_unknown_volume_defaults() {
        assert_eq!(parse_daily_volume("lots"), DEFAULT_ANNUAL_VOLUME);
        assert_eq!(parse_daily_volume(""), DEFAULT_ANNUAL_VOLUME);
    }

    #[test]
    fn test_annual_volume_no_substring_collision() {
        assert_eq!(ANNUAL_VOLUME_TABLE.lookup("375,000 units/year"), 375_000);
        assert_eq!(ANNUAL_VOLUME_TABLE.lookup("75,000 units/year"), 75_000);
        assert_eq!(ANNUAL_VOLUME_TABLE.lookup("250000 units"), 250_000);
        assert_eq!(ANNUAL_VOLUME_TABLE.lookup("1.5M units/year"), 1_500_000);
        assert_eq!(ANNUAL_VOLUME_TABLE.lookup("15,000,000 units"), 15_000_000);
        assert_eq!(ANNUAL_VOLUME_TABLE.lookup("7.5 M"), 7_500_000);
    }

    // ==========================================
    // 员工数与自动化现状
    // ==========================================

    #[test]
    fn test_headcount_buckets() {
        let f = factory();
        let count = |s: &str| f.resolve_profile(&profile("", s, "")).employee_count;

        assert_eq!(count("1-10 employees"), 5);
        assert_eq!(count("11-50 employees"), 25);
        assert_eq!(count("51-200 employees"), 100);
        assert_eq!(count("200+ employees"), 300);
        assert_eq!(count("Over 200"), 300);
        assert_eq!(count("large"), 350);
        assert_eq!(count("a few"), 25);
    }

    #[test]
    fn test_maturity_labels_and_percentages() {
        assert_eq!(parse_maturity("Fully manual operations").automated_share, 0.05);
        assert_eq!(parse_maturity("Some automated tools").automated_share, 0.15);
        assert_eq!(parse_maturity("Partially automated").automated_share, 0.35);
        assert_eq!(parse_maturity("Highly automated").automated_share, 0.65);
        assert_eq!(parse_maturity("Fully automated").automated_share, 0.90);
        assert_eq!(parse_maturity("40%").automated_share, 0.40);
        assert_eq!(parse_maturity("10-20%").automated_share, 0.15);
        assert_eq!(parse_maturity("not sure").automated_share, DEFAULT_AUTOMATED_SHARE);
        assert_eq!(parse_maturity("not sure").label, "not sure");
    }

    #[test]
    fn test_unrecognized_maturity_gets_low_automation_metrics() {
        let baseline = factory().build(
            &FinancialAggregates::default(),
            &profile("100-1000 units/day", "51-200 employees", "not sure"),
        );
        assert_eq!(baseline.operations.automation_maturity.automated_share, 0.15);

        let m = &baseline.manufacturing_metrics;
        assert_eq!(m.first_pass_yield, 0.88, "无法识别的现状应按低自动化估计");
        assert_eq!(m.rework_rate, 0.06);
        assert_eq!(m.labor_utilization, 0.75);
    }

    // ==========================================
    // 问卷分析路径
    // ==========================================

    #[test]
    fn test_insights_take_precedence() {
        let insights = QuestionnaireInsights {
            size_category: Some("large".to_string()),
            production_volume_annual: Some("375,000 units/year".to_string()),
            automation_percentage: Some("60%".to_string()),
            quality_loss_percentage: Some("10-20%".to_string()),
            opportunities: BTreeMap::new(),
        };
        let p = profile("< 100 units/day", "1-10 employees", "Fully manual operations").with_insights(insights);

        let ops = factory().resolve_profile(&p);
        assert_eq!(ops.production_volume, 375_000);
        assert_eq!(ops.employee_count, 350);
        assert_eq!(ops.automation_maturity.automated_share, 0.60);
        assert_eq!(ops.quality_loss_rate, 0.15);
    }

    #[test]
    fn test_insights_partial_fall_back_to_buckets() {
        let insights = QuestionnaireInsights {
            size_category: Some("enterprise".to_string()),
            ..Default::default()
        };
        let p = profile("100-1000 units/day", "1-10 employees", "Highly automated").with_insights(insights);

        let ops = factory().resolve_profile(&p);
        assert_eq!(ops.employee_count, 75, "未知规模档应为 75");
        assert_eq!(ops.production_volume, 125_000);
        assert_eq!(ops.automation_maturity.automated_share, 0.65);
        assert_eq!(ops.quality_loss_rate, DEFAULT_QUALITY_LOSS_RATE);
    }

    #[test]
    fn test_metrics_with_quality_potential() {
        let mut opportunities = BTreeMap::new();
        opportunities.insert(AutomationCategory::Quality, OpportunityPotential::High);
        opportunities.insert(AutomationCategory::Labor, OpportunityPotential::Low);
        let insights = QuestionnaireInsights {
            quality_loss_percentage: Some("10%".to_string()),
            opportunities,
            ..Default::default()
        };
        let p = profile("1000-10000 units/day", "51-200 employees", "").with_insights(insights);

        let baseline = factory().build(&FinancialAggregates::default(), &p);
        let m = &baseline.manufacturing_metrics;
        assert_eq!(m.first_pass_yield, 0.85);
        assert!((m.rework_rate - 0.06).abs() < 1e-12);
        assert!((m.scrap_rate - 0.04).abs() < 1e-12);
        assert_eq!(m.labor_utilization, 0.90);
        assert_eq!(m.overtime_percentage, 0.05);
        // 年产量 250 万件 → 高产量
        assert_eq!(m.units_per_hour, 300.0);
        assert_eq!(m.setup_time_hours, 0.5);
    }

    #[test]
    fn test_metrics_without_insights() {
        let manual = factory().build(
            &FinancialAggregates::default(),
            &profile("< 100 units/day", "1-10 employees", "Fully manual operations"),
        );
        assert_eq!(manual.manufacturing_metrics.first_pass_yield, 0.88);
        assert_eq!(manual.manufacturing_metrics.units_per_hour, 25.0);
        assert_eq!(manual.manufacturing_metrics.setup_time_hours, 6.0);

        let automated = factory().build(
            &FinancialAggregates::default(),
            &profile("100-1000 units/day", "51-200 employees", "Fully automated"),
        );
        assert_eq!(automated.manufacturing_metrics.first_pass_yield, 0.96);
        assert_eq!(automated.manufacturing_metrics.labor_utilization, 0.88);
        assert_eq!(automated.manufacturing_metrics.units_per_hour, 100.0);
    }

    #[test]
    fn test_build_decomposes_costs() {
        let financial = FinancialAggregates::new(5_000_000.0, 3_000_000.0, 1_200_000.0, 500_000.0);
        let baseline = factory().build(&financial, &CompanyProfile::default());

        assert_eq!(baseline.financials, financial);
        assert!((baseline.cost_breakdown.labor_total() - 1_200_000.0).abs() < 1e-6);
        assert_eq!(baseline.employee_count(), 25);
        assert_eq!(baseline.production_volume(), 1_250_000);
    }
}
