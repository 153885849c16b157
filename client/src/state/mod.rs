//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data held in an `RwSignal` provided via context; the
//! transition methods live on the state types so they can be tested without
//! a reactive runtime.

pub mod products;
