//! Accept reduction.
//!
//! `out` is the number of positions at which the accept state was active,
//! including row 0. Callers must test it for non-zero; a pattern that
//! re-enters the accept state counts every visit.

use circomata_core::NodeId;

use crate::ir::{Expr, LoopRange, Row, Signal, SignalDecl, Stmt};

pub fn reduction(accept: NodeId) -> Vec<Stmt> {
    let running = Stmt::Loop {
        range: LoopRange::window_inclusive(1),
        body: vec![Stmt::Constrain {
            target: Signal::Sum(Row::Current),
            value: Expr::add(
                Expr::Signal(Signal::Sum(Row::Previous)),
                Expr::state(Row::Current, accept),
            ),
        }],
    };

    vec![
        Stmt::Blank,
        Stmt::DeclareSignal(SignalDecl::Sum),
        Stmt::Constrain {
            target: Signal::Sum(Row::Zero),
            value: Expr::state(Row::Zero, accept),
        },
        running,
        Stmt::Constrain {
            target: Signal::Out,
            value: Expr::Signal(Signal::Sum(Row::Last)),
        },
    ]
}
