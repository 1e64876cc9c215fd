//! Core emitter struct and transition lowering.

use circomata_core::{Automaton, EncodingError, NodeId};
use log::{debug, trace};

use crate::classes::{self, CharClass, Check};
use crate::ir::{
    Column, ComponentKind, ComponentRef, Expr, LoopRange, Port, Program, Row, Signal, Stmt,
    Template,
};
use crate::reverse::{Incoming, ReverseAdjacency};

use super::{ComponentCounts, accept, declare};

/// Comparator width for range checks; inputs are single bytes.
const BYTE_BITS: u8 = 8;

/// Constraint emitter for one automaton.
///
/// Owns the component counters and the transition body for a single
/// compilation. Nothing is shared between emitters.
pub struct Emitter<'a> {
    automaton: &'a Automaton,
    reverse: &'a ReverseAdjacency<'a>,

    counts: ComponentCounts,
    /// Statements of the transition loop body
    body: Vec<Stmt>,
}

impl<'a> Emitter<'a> {
    pub fn new(automaton: &'a Automaton, reverse: &'a ReverseAdjacency<'a>) -> Self {
        Self {
            automaton,
            reverse,
            counts: ComponentCounts::default(),
            body: Vec::new(),
        }
    }

    /// Lower every transition, then assemble the full program.
    pub fn emit(mut self) -> Result<(Program, ComponentCounts), EncodingError> {
        for node in 1..self.automaton.len() {
            self.emit_node(node)?;
        }

        let nodes = self.automaton.len();
        let program = Program {
            declarations: declare::declarations(&self.counts, nodes),
            init: declare::boundary(self.automaton.start(), nodes),
            transitions: vec![Stmt::Loop {
                range: LoopRange::window(0),
                body: self.body,
            }],
            accept: accept::reduction(self.automaton.accept()),
        };

        debug!(
            "emitted {} components (eq {}, lt {}, and {}, multi_or {})",
            self.counts.total(),
            self.counts.eq,
            self.counts.lt,
            self.counts.and,
            self.counts.multi_or
        );
        Ok((program, self.counts))
    }

    fn emit_node(&mut self, node: NodeId) -> Result<(), EncodingError> {
        let reverse = self.reverse;
        let incoming = reverse.incoming(node);
        if incoming.is_empty() {
            // Never entered: pin the state to zero in every row after the first.
            trace!("node {node}: no incoming edges");
            self.body.push(Stmt::Constrain {
                target: Signal::State {
                    row: Row::Next,
                    column: Column::Node(node),
                },
                value: Expr::Const(0),
            });
            return Ok(());
        }

        let mut contributions = Vec::with_capacity(incoming.len());
        for edge in incoming {
            contributions.push(self.emit_edge(node, edge)?);
        }

        let value = self.any_of(&contributions);
        self.body.push(Stmt::Constrain {
            target: Signal::State {
                row: Row::Next,
                column: Column::Node(node),
            },
            value,
        });
        trace!("node {node}: {} incoming edges", incoming.len());
        Ok(())
    }

    /// `AND(states[i][source], condition)` for one edge into `dest`.
    fn emit_edge(&mut self, dest: NodeId, edge: &Incoming<'_>) -> Result<ComponentRef, EncodingError> {
        let checks = classes::plan(edge.label, edge.source, dest)?;
        let terms: Vec<ComponentRef> = checks.into_iter().map(|c| self.lower(c)).collect();

        let gate = self.instantiate(ComponentKind::And, Template::And);
        self.wire(gate, Port::A, Expr::state(Row::Current, edge.source));
        let condition = self.any_of(&terms);
        self.wire(gate, Port::B, condition);
        Ok(gate)
    }

    fn lower(&mut self, check: Check) -> ComponentRef {
        match check {
            Check::Range(class) => self.range_check(class),
            Check::Equal(code) => self.equality_check(code),
        }
    }

    /// `lower < in[i] && in[i] < upper`
    fn range_check(&mut self, class: CharClass) -> ComponentRef {
        let (lower, upper) = class.bounds();
        self.body.push(Stmt::Comment(class.label().to_owned()));

        let above = self.instantiate(ComponentKind::Lt, Template::LessThan { bits: BYTE_BITS });
        self.wire(above, Port::In(0), Expr::Const(lower.into()));
        self.wire(above, Port::In(1), Expr::Byte);

        let below = self.instantiate(ComponentKind::Lt, Template::LessThan { bits: BYTE_BITS });
        self.wire(below, Port::In(0), Expr::Byte);
        self.wire(below, Port::In(1), Expr::Const(upper.into()));

        let both = self.instantiate(ComponentKind::And, Template::And);
        self.wire(both, Port::A, Expr::Output(above));
        self.wire(both, Port::B, Expr::Output(below));
        both
    }

    /// `in[i] == code`
    fn equality_check(&mut self, code: u8) -> ComponentRef {
        self.body.push(Stmt::Comment(annotation(code)));

        let eq = self.instantiate(ComponentKind::Eq, Template::IsEqual);
        self.wire(eq, Port::In(0), Expr::Byte);
        self.wire(eq, Port::In(1), Expr::Const(code.into()));
        eq
    }

    /// The single term itself, or a `MultiOR` over all of them.
    fn any_of(&mut self, terms: &[ComponentRef]) -> Expr {
        if let [single] = terms {
            return Expr::Output(*single);
        }

        let or = self.instantiate(
            ComponentKind::MultiOr,
            Template::MultiOr { width: terms.len() },
        );
        for (k, term) in terms.iter().enumerate() {
            self.wire(or, Port::In(k), Expr::Output(*term));
        }
        Expr::Output(or)
    }

    fn instantiate(&mut self, kind: ComponentKind, template: Template) -> ComponentRef {
        let component = self.counts.allocate(kind);
        self.body.push(Stmt::Instantiate {
            component,
            template,
        });
        component
    }

    fn wire(&mut self, component: ComponentRef, port: Port, value: Expr) {
        self.body.push(Stmt::Wire {
            component,
            port,
            value,
        });
    }
}

/// Comment text for an equality check: the character itself when printable.
fn annotation(code: u8) -> String {
    if code.is_ascii_graphic() || code == b' ' {
        char::from(code).to_string()
    } else {
        code.escape_ascii().to_string()
    }
}
