// ==========================================
// 制造业自动化投资仿真系统 - 问卷选项映射表
// ==========================================
// 职责: 粗粒度问卷答案 → 数值估计
// 规则: 有序 (pattern, value) 表, 首个匹配生效
// 红线: 数字模式不得命中更长数字的片段 ("75,000" 不命中 "375,000")
// ==========================================

/// 有序映射表
#[derive(Debug, Clone, Copy)]
pub struct BucketTable<T: Copy + 'static> {
    name: &'static str,
    entries: &'static [(&'static str, T)],
    default: T,
}

impl<T: Copy + 'static> BucketTable<T> {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, T)], default: T) -> Self {
        Self {
            name,
            entries,
            default,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    /// 查找首个匹配项, 未命中返回 None
    pub fn find(&self, answer: &str) -> Option<T> {
        let normalized = normalize(answer);
        if normalized.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(pattern, _)| contains_bounded(&normalized, pattern))
            .map(|(_, value)| *value)
    }

    /// 查找, 未命中时回落默认值
    pub fn lookup(&self, answer: &str) -> T {
        self.find(answer).unwrap_or(self.default)
    }
}

/// 小写并去除所有空白
pub fn normalize(answer: &str) -> String {
    answer
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

/// haystack 中存在 pattern 的某次出现, 且两端不与数字相连
///
/// 仅当 pattern 自身以数字开头/结尾时检查对应一侧
fn contains_bounded(haystack: &str, pattern: &str) -> bool {
    let check_left = pattern.chars().next().is_some_and(|c| c.is_ascii_digit());
    let check_right = pattern.chars().last().is_some_and(|c| c.is_ascii_digit());

    haystack.match_indices(pattern).any(|(start, matched)| {
        let end = start + matched.len();
        let left_ok = !check_left
            || haystack[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !is_numeric_char(c));
        let right_ok = !check_right
            || haystack[end..]
                .chars()
                .next()
                .map_or(true, |c| !is_numeric_char(c));
        left_ok && right_ok
    })
}

/// 从答案中解析百分比: "25%" → 0.25, "10-20%" → 0.15
///
/// 无 '%' 或数字无法解析时返回 None
pub fn parse_percentage(answer: &str) -> Option<f64> {
    let normalized = normalize(answer);
    let head = normalized.split('%').next()?;
    if !normalized.contains('%') {
        return None;
    }

    let numbers: Vec<f64> = head
        .split('-')
        .map(|part| {
            part.chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect::<String>()
        })
        .filter(|digits| !digits.is_empty())
        .filter_map(|digits| digits.parse::<f64>().ok())
        .collect();

    match numbers.as_slice() {
        [] => None,
        [single] => Some(single / 100.0),
        [low, high, ..] => Some((low + high) / 200.0),
    }
}
