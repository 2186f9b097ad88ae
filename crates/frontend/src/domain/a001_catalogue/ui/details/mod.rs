//! Catalogue Details UI Module
//!
//! MVVM pattern:
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)
//!
//! API calls live in `a001_catalogue::api`.

mod view;
mod view_model;

pub use view::CatalogueDetails;
pub use view_model::CatalogueDetailsViewModel;
