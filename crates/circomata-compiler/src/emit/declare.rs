//! Array declarations and boundary rows.

use circomata_core::NodeId;

use crate::ir::{Column, Expr, LoopRange, Row, Signal, SignalDecl, Stmt};

use super::ComponentCounts;

/// Component arrays sized to the final counts, then the state matrix.
///
/// Kinds with no instances are not declared at all.
pub fn declarations(counts: &ComponentCounts, nodes: usize) -> Vec<Stmt> {
    let mut stmts: Vec<Stmt> = counts
        .iter()
        .filter(|&(_, count)| count > 0)
        .map(|(kind, count)| Stmt::DeclareComponents { kind, count })
        .collect();
    stmts.push(Stmt::DeclareSignal(SignalDecl::States { nodes }));
    stmts.push(Stmt::Blank);
    stmts
}

/// The start state is active in every row; every other state starts inactive.
pub fn boundary(start: NodeId, nodes: usize) -> Vec<Stmt> {
    let start_active = Stmt::Loop {
        range: LoopRange::window_inclusive(0),
        body: vec![Stmt::Constrain {
            target: Signal::State {
                row: Row::Current,
                column: Column::Node(start),
            },
            value: Expr::Const(1),
        }],
    };
    let rest_inactive = Stmt::Loop {
        range: LoopRange::fixed(start + 1, nodes),
        body: vec![Stmt::Constrain {
            target: Signal::State {
                row: Row::Zero,
                column: Column::Var,
            },
            value: Expr::Const(0),
        }],
    };
    vec![start_active, rest_inactive, Stmt::Blank]
}
