pub mod dropdown;
pub mod indicators;
pub mod pagination;
