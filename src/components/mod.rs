//! Reusable view components.

pub mod category_section;
pub mod confirm_dialog;
pub mod expense_section;
pub mod pagination;
