//! Typed statement list for the emitted constraint program.
//!
//! The emitter builds a [`Program`] out of these values; [`crate::render`]
//! turns it into Circom text in a single pass. Nothing here knows about
//! indentation or layout.

use circomata_core::NodeId;

/// Component array kinds, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Eq,
    Lt,
    And,
    MultiOr,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Eq,
        ComponentKind::Lt,
        ComponentKind::And,
        ComponentKind::MultiOr,
    ];

    /// Name of the component array in the emitted program.
    pub fn array(self) -> &'static str {
        match self {
            ComponentKind::Eq => "eq",
            ComponentKind::Lt => "lt",
            ComponentKind::And => "and",
            ComponentKind::MultiOr => "multi_or",
        }
    }
}

/// One numbered instance, `<array>[index][i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentRef {
    pub kind: ComponentKind,
    pub index: usize,
}

impl ComponentRef {
    pub fn new(kind: ComponentKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// Circuit template a component is instantiated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    IsEqual,
    LessThan { bits: u8 },
    And,
    MultiOr { width: usize },
}

/// Input port of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    /// `in[k]`
    In(usize),
    A,
    B,
}

/// Row index into a per-position signal array, relative to the loop variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Zero,
    Current,
    Next,
    Previous,
    /// The window length itself (`num_bytes`).
    Last,
}

/// Column index into the state matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Node(NodeId),
    /// The loop variable.
    Var,
}

/// Assignable signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    State { row: Row, column: Column },
    /// Accept accumulator cell, `final_state_sum[row]`.
    Sum(Row),
    /// The template's single output.
    Out,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Const(u64),
    /// Input byte at the loop position, `in[i]`.
    Byte,
    Signal(Signal),
    Output(ComponentRef),
    Add(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn state(row: Row, node: NodeId) -> Self {
        Expr::Signal(Signal::State {
            row,
            column: Column::Node(node),
        })
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Expr::Add(Box::new(lhs), Box::new(rhs))
    }
}

/// Signal arrays sized by the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalDecl {
    /// `states[window+1][nodes]`
    States { nodes: usize },
    /// `final_state_sum[window+1]`
    Sum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Const(usize),
    Window,
}

/// `for (var i = start; i < end; i++)`, or `<=` when inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopRange {
    pub start: Bound,
    pub end: Bound,
    pub inclusive: bool,
}

impl LoopRange {
    /// `start..window`
    pub fn window(start: usize) -> Self {
        Self {
            start: Bound::Const(start),
            end: Bound::Window,
            inclusive: false,
        }
    }

    /// `start..=window`
    pub fn window_inclusive(start: usize) -> Self {
        Self {
            inclusive: true,
            ..Self::window(start)
        }
    }

    /// `start..end`
    pub fn fixed(start: usize, end: usize) -> Self {
        Self {
            start: Bound::Const(start),
            end: Bound::Const(end),
            inclusive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `component <array>[count][window];`
    DeclareComponents { kind: ComponentKind, count: usize },
    DeclareSignal(SignalDecl),
    Loop { range: LoopRange, body: Vec<Stmt> },
    Instantiate { component: ComponentRef, template: Template },
    Wire { component: ComponentRef, port: Port, value: Expr },
    Constrain { target: Signal, value: Expr },
    /// Annotation, only rendered on request.
    Comment(String),
    Blank,
}

/// The four sections of an emitted program, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub declarations: Vec<Stmt>,
    pub init: Vec<Stmt>,
    pub transitions: Vec<Stmt>,
    pub accept: Vec<Stmt>,
}

impl Program {
    /// All statements in output order.
    pub fn statements(&self) -> impl Iterator<Item = &Stmt> {
        self.declarations
            .iter()
            .chain(&self.init)
            .chain(&self.transitions)
            .chain(&self.accept)
    }
}
