//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and content sections; route-level
//! orchestration lives in `pages`. The theme toggle is the only component
//! that touches shared state.

pub mod experience_timeline;
pub mod project_card;
pub mod site_footer;
pub mod site_header;
pub mod skills_grid;
pub mod theme_toggle;
