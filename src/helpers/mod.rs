//! Helper functions for page data
//!
//! Small utilities the commands share: route building, card text and
//! post list filtering.

mod list;
mod text;
mod url;

pub use list::*;
pub use text::*;
pub use url::*;
