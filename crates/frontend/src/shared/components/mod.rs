pub mod active_badge;
pub mod charts;
pub mod filter_panel;
pub mod number_format;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table_checkbox;
