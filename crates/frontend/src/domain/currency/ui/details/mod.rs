mod view;
mod view_model;

pub use view::CurrencyDetails;
pub use view_model::CurrencyDetailsViewModel;
