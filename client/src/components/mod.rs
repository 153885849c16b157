//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the list chrome and report user intent upward as
//! `FilterUpdate` callbacks; only the page decides what an update triggers.

pub mod filter_bar;
pub mod pager;
pub mod product_table;
