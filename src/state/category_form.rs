//! Editable draft of a category record.

#[cfg(test)]
#[path = "category_form_test.rs"]
mod category_form_test;

use crate::net::types::{Category, CategoryPayload, CategoryType};

/// The in-progress category form. `id` present means edit mode (submit
/// becomes a PUT); absent means create mode (POST).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryDraft {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub icon_name: String,
    pub color_code: String,
    pub category_type: CategoryType,
}

impl CategoryDraft {
    /// Populate the draft from an existing record for editing.
    pub fn edit(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            icon_name: category.icon_name.clone().unwrap_or_default(),
            color_code: category.color_code.clone().unwrap_or_default(),
            category_type: category.category_type,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Check required fields and build the request body. A validation
    /// failure means no network request is issued at all.
    pub fn validate(&self) -> Result<CategoryPayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_owned());
        }
        Ok(CategoryPayload {
            name: name.to_owned(),
            description: non_blank(&self.description),
            icon_name: non_blank(&self.icon_name),
            color_code: non_blank(&self.color_code),
            category_type: self.category_type,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
