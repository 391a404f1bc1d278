//! The fixed JGJ59-2011 category table.

use serde::Serialize;

/// Points available across all categories when every one applies.
pub const FULL_MARKS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Scored by a single entered number.
    Simple,
    /// Scored by the mean of its checked sub-items.
    Composite,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDefinition {
    pub key: &'static str,
    pub display_name: &'static str,
    pub max_weight: u32,
    pub kind: CategoryKind,
    pub sub_item_names: &'static [&'static str],
}

impl CategoryDefinition {
    const fn simple(key: &'static str, display_name: &'static str, max_weight: u32) -> Self {
        Self {
            key,
            display_name,
            max_weight,
            kind: CategoryKind::Simple,
            sub_item_names: &[],
        }
    }

    const fn composite(
        key: &'static str,
        display_name: &'static str,
        max_weight: u32,
        sub_item_names: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            display_name,
            max_weight,
            kind: CategoryKind::Composite,
            sub_item_names,
        }
    }

    pub fn has_sub_item(&self, name: &str) -> bool {
        self.sub_item_names.contains(&name)
    }
}

static CATEGORIES: [CategoryDefinition; 10] = [
    CategoryDefinition::simple("manage", "安全管理", 10),
    CategoryDefinition::simple("civil", "文明施工", 15),
    CategoryDefinition::composite(
        "scaffold",
        "脚手架",
        10,
        &[
            "扣件式钢管脚手架",
            "悬挑式脚手架",
            "门式钢管脚手架",
            "碗扣式钢管脚手架",
            "附着式升降脚手架",
            "承插型盘扣式钢管脚手架",
            "高处作业吊篮",
            "满堂脚手架",
        ],
    ),
    CategoryDefinition::simple("pit", "基坑工程", 10),
    CategoryDefinition::simple("template", "模板支架", 10),
    CategoryDefinition::simple("height", "高处作业", 10),
    CategoryDefinition::simple("electric", "施工用电", 10),
    CategoryDefinition::composite(
        "hoist",
        "物料提升机与施工升降机",
        10,
        &["物料提升机", "施工升降机"],
    ),
    CategoryDefinition::composite(
        "crane",
        "塔式起重机与起重吊装",
        10,
        &["塔式起重机", "起重吊装"],
    ),
    CategoryDefinition::simple("machinery", "施工机具", 5),
];

pub fn list_categories() -> &'static [CategoryDefinition] {
    &CATEGORIES
}

pub fn find_category(key: &str) -> Option<&'static CategoryDefinition> {
    CATEGORIES.iter().find(|category| category.key == key)
}
