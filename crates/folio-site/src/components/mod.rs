//! UI components for the portfolio page.

mod app;
mod footer;
mod navbar;
mod section;

pub use app::*;
pub use footer::*;
pub use navbar::*;
pub use section::*;
