pub mod row;
pub mod state;
pub mod view_model;

mod view;

pub use view::CatalogueList;
pub use view_model::CatalogueListViewModel;
