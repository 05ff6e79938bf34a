mod view;
mod view_model;

pub use view::PostsPageDetails;
pub use view_model::PostsPageDetailsViewModel;
