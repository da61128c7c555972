pub mod pointer;

pub use pointer::{wire_contact_button, wire_pointer_handlers, Listener, PointerWiring};
