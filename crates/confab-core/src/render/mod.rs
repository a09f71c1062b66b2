//! Safe rendering of reply text for HTML display surfaces.

pub mod safe_html;

pub use safe_html::{render_message, SafeHtml};
