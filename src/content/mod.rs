//! Static content collections mapped to typed view models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Collections are JSON files embedded at compile time; each module maps
//! its records into the shapes pages and components render, resolving image
//! references through `assets`. There is no runtime I/O and no failure
//! surface beyond an empty collection.

pub mod assets;
pub mod blog;
pub mod experience;
pub mod projects;
pub mod skills;
