// ==========================================
// 制造业自动化投资仿真系统 - 领域类型定义
// ==========================================
// 自动化类别 / 机会潜力 / 规模档位 / 自动化水平
// ==========================================

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 自动化类别 (Automation Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomationCategory {
    Labor,     // 人工优化
    Quality,   // 质量控制
    Inventory, // 库存管理
    Service,   // 客户服务
}

impl AutomationCategory {
    pub const ALL: [AutomationCategory; 4] = [
        AutomationCategory::Labor,
        AutomationCategory::Quality,
        AutomationCategory::Inventory,
        AutomationCategory::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AutomationCategory::Labor => "labor",
            AutomationCategory::Quality => "quality",
            AutomationCategory::Inventory => "inventory",
            AutomationCategory::Service => "service",
        }
    }
}

impl fmt::Display for AutomationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AutomationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "labor" | "labor_optimization" | "labour" => Ok(AutomationCategory::Labor),
            "quality" | "quality_control" => Ok(AutomationCategory::Quality),
            "inventory" | "inventory_management" => Ok(AutomationCategory::Inventory),
            "service" | "customer_service" => Ok(AutomationCategory::Service),
            other => Err(format!("未知自动化类别: {}", other)),
        }
    }
}

// ==========================================
// 自动化机会潜力 (Opportunity Potential)
// ==========================================
// 来源: 问卷分析 (外部协作方), 仅用于偏置运营指标估计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityPotential {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for OpportunityPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpportunityPotential::High => write!(f, "high"),
            OpportunityPotential::Medium => write!(f, "medium"),
            OpportunityPotential::Low => write!(f, "low"),
        }
    }
}

// ==========================================
// 规模档位 (Scale Tier)
// ==========================================
// 人工类按员工数分档, 质量类按年产量分档
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleTier {
    Small,
    Medium,
    Large,
}

impl ScaleTier {
    /// 按阈值分档: value > large → Large; value < small → Small; 其余 Medium
    pub fn classify(value: u64, small_below: u64, large_above: u64) -> Self {
        if value > large_above {
            ScaleTier::Large
        } else if value < small_below {
            ScaleTier::Small
        } else {
            ScaleTier::Medium
        }
    }
}

impl fmt::Display for ScaleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleTier::Small => write!(f, "small"),
            ScaleTier::Medium => write!(f, "medium"),
            ScaleTier::Large => write!(f, "large"),
        }
    }
}

// ==========================================
// 自动化水平 (Automation Level)
// ==========================================
// 红线: 取值必须 ∈ [0, 1], 构造时校验, 计算器因此是全函数
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AutomationLevel(f64);

impl AutomationLevel {
    pub const ZERO: AutomationLevel = AutomationLevel(0.0);
    pub const HALF: AutomationLevel = AutomationLevel(0.5);
    pub const FULL: AutomationLevel = AutomationLevel(1.0);

    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(AutomationLevel(value))
        } else {
            Err(DomainError::AutomationLevelOutOfRange { value })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for AutomationLevel {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        AutomationLevel::new(value)
    }
}

impl From<AutomationLevel> for f64 {
    fn from(level: AutomationLevel) -> Self {
        level.0
    }
}

impl fmt::Display for AutomationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

// ==========================================
// 各类别自动化水平 (Automation Levels)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutomationLevels {
    pub labor: AutomationLevel,
    pub quality: AutomationLevel,
    pub inventory: AutomationLevel,
    pub service: AutomationLevel,
}

impl AutomationLevels {
    /// 四类使用同一水平
    pub fn uniform(level: AutomationLevel) -> Self {
        Self {
            labor: level,
            quality: level,
            inventory: level,
            service: level,
        }
    }

    pub fn get(&self, category: AutomationCategory) -> AutomationLevel {
        match category {
            AutomationCategory::Labor => self.labor,
            AutomationCategory::Quality => self.quality,
            AutomationCategory::Inventory => self.inventory,
            AutomationCategory::Service => self.service,
        }
    }

    pub fn with(mut self, category: AutomationCategory, level: AutomationLevel) -> Self {
        match category {
            AutomationCategory::Labor => self.labor = level,
            AutomationCategory::Quality => self.quality = level,
            AutomationCategory::Inventory => self.inventory = level,
            AutomationCategory::Service => self.service = level,
        }
        self
    }
}

impl Default for AutomationLevels {
    fn default() -> Self {
        Self::uniform(AutomationLevel::HALF)
    }
}
