//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `pager`, form drafts, the
//! stale-response guard) as plain structs with pure methods, so the
//! list/form reconciliation rules are unit-testable without a browser.
//! Components hold these in `RwSignal`s; only the session is shared
//! app-wide via context.

pub mod category_form;
pub mod expense_form;
pub mod latest;
pub mod pager;
pub mod session;
