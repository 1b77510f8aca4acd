//! Structural validators.
//!
//! Each validator is an independent check over one element of the root
//! document, consulting the symbol index and closure membership where it
//! needs them. Validators only ever emit diagnostics; they never stop a
//! run.

pub mod collisions;
pub mod enum_literal;
pub mod map_key;
pub mod method_args;

pub use collisions::check_collisions;
pub use enum_literal::{LiteralIssue, check_enumeration, classify_literal};
pub use map_key::{TypeScope, check_map_key};
pub use method_args::check_interface_methods;
