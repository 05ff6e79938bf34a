mod view;
mod view_model;

pub use view::ProductsPageDetails;
pub use view_model::ProductsPageDetailsViewModel;
