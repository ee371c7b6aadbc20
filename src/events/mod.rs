pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_pointer_handlers, wire_reform_on_click, PointerWiring};
