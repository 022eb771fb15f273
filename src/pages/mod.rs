//! Top-level route views.

pub mod dashboard;
pub mod login;
pub mod signup;
