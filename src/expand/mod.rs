//! Template expansion engine.
//!
//! This module provides:
//!
//! - **Scanner**: finds the next `(@name@)` marker
//! - **Registry**: maps marker names to the built-in directives
//! - **Generators**: produce the text that replaces a marker
//! - **Driver**: runs the scan/emit/execute loop over a whole source
//!
//! # Marker Syntax
//!
//! ```text
//! requires(data_member_count<T> <= (@limit@)) {
//!     if constexpr(data_member_count<T> == 0) {
//!         return std::tuple<>{};
//!     } (@generate_specializations@)
//! }
//! ```
//!
//! There is no escaping and markers do not nest.

mod directive;
mod driver;
mod error;
mod generators;
mod scanner;
mod sink;


pub use directive::{Directive, DirectiveRegistry, Limit};
pub use driver::{Expander, Expansion, Invocation};
pub use error::{ExpandError, MalformedReason};
