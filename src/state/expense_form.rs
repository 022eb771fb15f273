//! Editable draft of an expense record.
//!
//! Amount and category arrive from text inputs, so they are kept as
//! strings in the draft and coerced at submit time. The `required`
//! attribute on the inputs is not sufficient: a non-numeric amount must
//! fail validation rather than be silently coerced.

#[cfg(test)]
#[path = "expense_form_test.rs"]
mod expense_form_test;

use crate::net::types::{Expense, ExpensePayload};

/// The in-progress expense form. `id` present means edit mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub amount: String,
    pub expense_date: String,
    pub category_id: String,
}

impl ExpenseDraft {
    /// Blank create-mode draft. The date defaults to today.
    pub fn blank(today: String) -> Self {
        Self {
            expense_date: today,
            ..Self::default()
        }
    }

    /// Populate the draft from an existing record for editing.
    pub fn edit(expense: &Expense) -> Self {
        Self {
            id: Some(expense.id),
            title: expense.title.clone(),
            description: expense.description.clone().unwrap_or_default(),
            amount: expense.amount.to_string(),
            expense_date: expense.expense_date.clone(),
            category_id: expense
                .category_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Check required fields, coerce the numeric ones, and build the
    /// request body. Returns the first problem found.
    pub fn validate(&self) -> Result<ExpensePayload, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_owned());
        }

        let amount_text = self.amount.trim();
        if amount_text.is_empty() {
            return Err("Amount is required".to_owned());
        }
        let amount: f64 = amount_text
            .parse()
            .map_err(|_| "Amount must be a number".to_owned())?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err("Amount must be positive".to_owned());
        }

        let expense_date = self.expense_date.trim();
        if expense_date.is_empty() {
            return Err("Date is required".to_owned());
        }

        let category_text = self.category_id.trim();
        if category_text.is_empty() {
            return Err("Category is required".to_owned());
        }
        let category_id: i64 = category_text
            .parse()
            .map_err(|_| "Category is required".to_owned())?;

        let description = self.description.trim();
        Ok(ExpensePayload {
            title: title.to_owned(),
            amount,
            expense_date: expense_date.to_owned(),
            category_id,
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_owned())
            },
        })
    }
}
