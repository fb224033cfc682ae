// ==========================================
// 制造业自动化投资仿真系统 - 财务与企业画像输入
// ==========================================
// 来源: P&L 解析 (外部协作方) + 问卷 (外部协作方)
// 红线: 输入不可变, 核心不校验量级关系
// ==========================================

use crate::domain::types::{AutomationCategory, OpportunityPotential};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// FinancialAggregates - P&L 汇总
// ==========================================
/// 年度 P&L 汇总 (0 表示未知/缺失)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialAggregates {
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub cogs: f64,
    #[serde(default)]
    pub labor_costs: f64,
    #[serde(default)]
    pub overhead_costs: f64,
}

impl FinancialAggregates {
    pub fn new(revenue: f64, cogs: f64, labor_costs: f64, overhead_costs: f64) -> Self {
        Self {
            revenue,
            cogs,
            labor_costs,
            overhead_costs,
        }
    }

    pub fn monthly_revenue(&self) -> f64 {
        self.revenue / 12.0
    }

    pub fn monthly_costs(&self) -> f64 {
        (self.cogs + self.labor_costs + self.overhead_costs) / 12.0
    }

    pub fn monthly_profit(&self) -> f64 {
        self.monthly_revenue() - self.monthly_costs()
    }
}

// ==========================================
// CompanyProfile - 企业画像 (问卷答案)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// 产量选项, 如 "1000-10000 units/day"
    #[serde(default = "default_production_volume")]
    pub production_volume: String,
    /// 员工数选项或规模档, 如 "51-200 employees" / "medium"
    #[serde(default = "default_employee_count")]
    pub employee_count: String,
    /// 自动化现状, 描述性文字或百分比, 如 "Some automated tools" / "25%"
    #[serde(default = "default_automation_level")]
    pub automation_level: String,
    /// 问卷深度分析 (可选增强)
    #[serde(default)]
    pub insights: Option<QuestionnaireInsights>,
}

fn default_production_volume() -> String {
    "1000-10000 units/day".to_string()
}

fn default_employee_count() -> String {
    "11-50 employees".to_string()
}

fn default_automation_level() -> String {
    "Some automated tools".to_string()
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            production_volume: default_production_volume(),
            employee_count: default_employee_count(),
            automation_level: default_automation_level(),
            insights: None,
        }
    }
}

impl CompanyProfile {
    pub fn new(production_volume: &str, employee_count: &str, automation_level: &str) -> Self {
        Self {
            production_volume: production_volume.to_string(),
            employee_count: employee_count.to_string(),
            automation_level: automation_level.to_string(),
            insights: None,
        }
    }

    pub fn with_insights(mut self, insights: QuestionnaireInsights) -> Self {
        self.insights = Some(insights);
        self
    }
}

// ==========================================
// QuestionnaireInsights - 问卷深度分析
// ==========================================
/// 问卷分析结果, 存在的字段优先于画像中的粗粒度选项
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestionnaireInsights {
    /// small / medium / large
    #[serde(default)]
    pub size_category: Option<String>,
    /// 如 "250,000 units/year" / "1.5M units/year"
    #[serde(default)]
    pub production_volume_annual: Option<String>,
    /// 如 "25%"
    #[serde(default)]
    pub automation_percentage: Option<String>,
    /// 如 "10-20%"
    #[serde(default)]
    pub quality_loss_percentage: Option<String>,
    /// 各类别自动化机会潜力
    #[serde(default)]
    pub opportunities: BTreeMap<AutomationCategory, OpportunityPotential>,
}

impl QuestionnaireInsights {
    /// 获取某类别的机会潜力, 未提供时为 medium
    pub fn potential(&self, category: AutomationCategory) -> OpportunityPotential {
        self.opportunities.get(&category).copied().unwrap_or_default()
    }
}
