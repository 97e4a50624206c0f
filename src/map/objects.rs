pub mod items;
pub mod item_catalog;
