//! Built-in generators.
//!
//! Both generators read the member-count limit and write whole lines to the
//! sink. They share no state, so each call is independent of any other.

use super::directive::Limit;
use super::sink::OutputSink;

/// Name of the `n`-th placeholder in a binding: `e` plus two hex digits.
pub fn placeholder(index: usize) -> String {
    format!("e{:02X}", index)
}

/// Comma-separated placeholders for an `arity`-member binding.
pub fn placeholder_list(arity: usize) -> String {
    (0..arity).map(placeholder).collect::<Vec<_>>().join(", ")
}

/// Write the limit as a bare decimal number.
pub fn emit_limit(limit: Limit, sink: &mut OutputSink) {
    sink.write_line(&limit.get().to_string());
}

/// Write one `if constexpr` branch per arity, from 1 through `limit`.
pub fn emit_specializations(limit: Limit, sink: &mut OutputSink) {
    for arity in 1..=usize::from(limit.get()) {
        emit_specialization(arity, sink);
    }
}

/// Write the branch handling types with exactly `arity` data members.
fn emit_specialization(arity: usize, sink: &mut OutputSink) {
    let names = placeholder_list(arity);

    sink.write_line(&format!(
        "else if constexpr(data_member_count<T> == {}) {{",
        arity
    ));
    sink.write_line("// Obtain references to member objects using structural bindings.");
    sink.write_line(&format!("auto& [{}] = x;", names));
    sink.write_line("");
    sink.write_line("// Construct a tuple from these references.");
    sink.write_line(&format!("return std::tie({});", names));
    sink.write_line("}");
}
