//! Portfolio page behaviors, kept as plain functions of their inputs so the
//! rendering layer only wires events to them.

pub mod contact;
pub mod downloads;
pub mod nav;
