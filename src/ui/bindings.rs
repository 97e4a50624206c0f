pub mod input_bindings;
pub mod action_bindings;
