//! Presentation rendering for MediMind.
//!
//! Text blocks for search results and chat transcripts, the single-page HTML
//! surface served by the HTTP host, and optional stylesheet loading.

pub mod page;
pub mod render;
pub mod stylesheet;

pub use page::{render_page, PAGE_ICON, PAGE_SUBTITLE, PAGE_TITLE};
pub use render::{render_match, render_outcome, render_transcript};
pub use stylesheet::{Stylesheet, MISSING_STYLESHEET_WARNING};
