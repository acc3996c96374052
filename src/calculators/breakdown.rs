use serde::{Deserialize, Serialize};

/// Contract label strings shared with the web front end.
///
/// Callers match on these exact strings when rendering a score grid, so they
/// are part of the public contract and must never be reworded.
pub mod labels {
    pub const AGE: &str = "年龄";
    pub const EDUCATION: &str = "学历";
    pub const FIRST_LANGUAGE: &str = "第一语言";
    pub const SECOND_LANGUAGE: &str = "第二语言";
    pub const CANADIAN_EXPERIENCE: &str = "加国经验";

    pub const SPOUSE_EDUCATION: &str = "配偶学历";
    pub const SPOUSE_LANGUAGE: &str = "配偶语言";
    pub const SPOUSE_CANADIAN_EXPERIENCE: &str = "配偶加国经验";

    pub const EDUCATION_WITH_LANGUAGE: &str = "学历+语言";
    pub const EDUCATION_WITH_CANADIAN_EXPERIENCE: &str = "学历+加国经验";
    pub const OVERSEAS_WITH_LANGUAGE: &str = "海外经验+语言";
    pub const OVERSEAS_WITH_CANADIAN_EXPERIENCE: &str = "海外经验+加国经验";

    pub const CANADIAN_STUDY: &str = "加拿大学习";
    pub const SIBLING_IN_CANADA: &str = "兄弟姐妹";
    pub const PROVINCIAL_NOMINATION: &str = "省提名";
    pub const BILINGUAL: &str = "双语言";
    pub const FRENCH_SKILL: &str = "法语技能";

    pub const CORE_HUMAN_CAPITAL: &str = "核心人力资本";
    pub const SPOUSE_FACTOR: &str = "配偶因素";
    pub const TRANSFERABLE_SKILLS: &str = "技能迁移性";
    pub const ADDITIONAL_POINTS: &str = "附加分";

    pub const BCPNP_WORK_EXPERIENCE: &str = "工作经验得分";
    pub const BCPNP_CANADIAN_EXPERIENCE: &str = "加拿大经验得分";
    pub const BCPNP_CURRENTLY_WORKING: &str = "当前在职得分";
    pub const BCPNP_EDUCATION: &str = "学历得分";
    pub const BCPNP_BC_EDUCATION: &str = "BC学习得分";
    pub const BCPNP_CANADA_EDUCATION: &str = "加国学习得分";
    pub const BCPNP_DESIGNATED_OCCUPATION: &str = "紧缺职业得分";
    pub const BCPNP_LANGUAGE: &str = "语言得分";
    pub const BCPNP_FRENCH: &str = "法语得分";
    pub const BCPNP_WAGE: &str = "岗位薪资得分";
    pub const BCPNP_REGION: &str = "地区得分";
    pub const BCPNP_REGION_STUDY_WORK: &str = "地区工作学习得分";

    pub const FSW_FIRST_LANGUAGE: &str = "第一语言得分";
    pub const FSW_SECOND_LANGUAGE: &str = "第二语言得分";
    pub const FSW_EDUCATION: &str = "学历得分";
    pub const FSW_WORK_EXPERIENCE: &str = "工作经验得分";
    pub const FSW_AGE: &str = "年龄得分";
    pub const FSW_ARRANGED_EMPLOYMENT: &str = "雇主担保得分";
    pub const FSW_ADAPTABILITY: &str = "适应能力得分";
}

/// Single labelled point contribution inside a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub label: String,
    pub points: i32,
}

impl BreakdownEntry {
    pub fn new(label: &str, points: i32) -> Self {
        Self {
            label: label.to_string(),
            points,
        }
    }
}

/// One category of the official scoring grid with its capped subtotal.
///
/// Entries record the raw value of each sub-factor; `subtotal` is the capped
/// category contribution, so it can be smaller than the entry sum (e.g. the
/// transferable-skills category caps at 50 per pairing group).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub name: String,
    pub entries: Vec<BreakdownEntry>,
    #[serde(rename = "小计")]
    pub subtotal: i32,
}

impl CategoryBreakdown {
    pub fn new(name: &str, entries: Vec<BreakdownEntry>, subtotal: i32) -> Self {
        Self {
            name: name.to_string(),
            entries,
            subtotal,
        }
    }

    pub fn points(&self, label: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.points)
    }
}

/// Nested category → sub-factor grid mirroring the published CRS tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub categories: Vec<CategoryBreakdown>,
}

impl ScoreBreakdown {
    pub fn category(&self, name: &str) -> Option<&CategoryBreakdown> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Look up a sub-factor by its contract label across all categories.
    pub fn points(&self, label: &str) -> Option<i32> {
        self.categories
            .iter()
            .find_map(|category| category.points(label))
    }

    pub fn total(&self) -> i32 {
        self.categories.iter().map(|category| category.subtotal).sum()
    }
}

/// Single-level breakdown used by the additive BC PNP and FSW scorers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatBreakdown {
    pub entries: Vec<BreakdownEntry>,
}

impl FlatBreakdown {
    pub fn push(&mut self, label: &str, points: i32) {
        self.entries.push(BreakdownEntry::new(label, points));
    }

    pub fn points(&self, label: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.points)
    }

    pub fn total(&self) -> i32 {
        self.entries.iter().map(|entry| entry.points).sum()
    }
}
