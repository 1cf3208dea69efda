//! The fixed demonstration printed by the `calc` binary.

use std::io::Write;

use crate::{Calculator, Call, Config, Result};

/// Renders one evaluated call, e.g. `10 / 2 = 5`.
pub fn format_line(call: &Call, result: i32) -> String {
    format!("{} {} {} = {}", call.a, call.op, call.b, result)
}

/// Evaluates every call of `config` in order and writes one line per call.
///
/// Stops at the first failing call; lines of the calls before it have
/// already been written.
pub fn run<W: Write>(calculator: &Calculator, config: &Config, out: &mut W) -> Result<()> {
    for call in &config.calls {
        tracing::debug!(op = %call.op, a = call.a, b = call.b, "evaluating call");
        let result = calculator.apply(call.op, call.a, call.b)?;
        writeln!(out, "{}", format_line(call, result))?;
    }
    out.flush()?;
    Ok(())
}
