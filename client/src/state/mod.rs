//! Client application state.
//!
//! ARCHITECTURE
//! ============
//! Each module holds a plain struct with explicit update methods. The app
//! shell wraps them in `RwSignal`s and provides them through context; the
//! structs themselves know nothing about Leptos.

pub mod edit;
pub mod elements;
pub mod filter;
