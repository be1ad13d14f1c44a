//! Use-Cases der Application-Layer-Orchestrierung.

pub mod filter;
pub mod options;
pub mod selection;
pub mod view;
