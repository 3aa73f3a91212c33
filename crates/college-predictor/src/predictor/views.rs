use super::catalog::ReferenceTable;
use super::domain::{Category, CategoryGroup, RuleFamily};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub code: &'static str,
    pub label: &'static str,
    pub group: CategoryGroup,
    pub rule: RuleFamily,
    pub score_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_label: Option<&'static str>,
    pub records: usize,
}

/// Describes every supported category, domestic exams first.
pub fn category_catalog(table: &ReferenceTable) -> Vec<CategoryView> {
    Category::supported()
        .into_iter()
        .filter_map(|category| {
            let (code, records) = match &category {
                Category::Domestic(exam) => (exam.code(), table.domestic(*exam).len()),
                Category::International(program) => {
                    (program.code(), table.international(*program).len())
                }
                Category::Unrecognized(_) => return None,
            };
            let rule = category.rule()?;
            Some(CategoryView {
                code,
                label: category.label()?,
                group: category.group(),
                rule,
                score_label: rule.score_label(),
                auxiliary_label: rule.auxiliary_label(),
                records,
            })
        })
        .collect()
}
