//! Web application serving the emotion diary.
//!
//! One form page: a diary entry is posted, analyzed through
//! [`kokoro::DiaryAnalyzer`], recorded in the injected [`kokoro::History`]
//! store and rendered back together with all past entries.

pub mod render;
pub mod web;

pub use web::{app, AppState};
