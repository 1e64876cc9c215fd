//! Circom text rendering.
//!
//! Without a template name the output is the bare template body, ready to be
//! pasted into a template that declares `in[<window>]` and `out`. With one,
//! it is a complete file including the circomlib imports and the `MultiOR`
//! helper the body instantiates.

mod config;
mod writer;


pub use config::Config;

use crate::ir::Program;

use writer::Writer;

const PRAGMA: &str = "pragma circom 2.1.4;";
const INCLUDES: [&str; 2] = [
    "include \"circomlib/circuits/comparators.circom\";",
    "include \"circomlib/circuits/gates.circom\";",
];

/// Render `program` as Circom text. Always ends with a single newline.
pub fn render(program: &Program, config: &Config) -> String {
    let mut w = Writer::new(config);

    let Some(name) = &config.template else {
        w.stmts(program.statements());
        return w.finish();
    };

    w.line(PRAGMA);
    w.line("");
    for include in INCLUDES {
        w.line(include);
    }
    w.line("");
    multi_or_helper(&mut w);
    w.line("");

    let window = &config.window;
    w.open(&format!("template {name}({window})"));
    w.line(&format!("signal input in[{window}];"));
    w.line("signal output out;");
    w.line("");
    w.stmts(program.statements());
    w.close();

    w.finish()
}

/// `MultiOR(n)`: 1 iff any input is non-zero.
fn multi_or_helper(w: &mut Writer<'_>) {
    w.open("template MultiOR(n)");
    w.line("signal input in[n];");
    w.line("signal output out;");
    w.line("");
    w.line("signal sums[n];");
    w.line("sums[0] <== in[0];");
    w.open("for (var i = 1; i < n; i++)");
    w.line("sums[i] <== sums[i-1] + in[i];");
    w.close();
    w.line("component is_zero = IsZero();");
    w.line("is_zero.in <== sums[n-1];");
    w.line("out <== 1 - is_zero.out;");
    w.close();
}
