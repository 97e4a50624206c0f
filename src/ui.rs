pub mod ui;
pub mod ui_util;
pub mod bindings;
