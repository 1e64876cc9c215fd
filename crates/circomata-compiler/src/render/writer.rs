//! Statement and expression rendering.

use crate::ir::{
    Bound, Column, ComponentRef, Expr, LoopRange, Port, Row, Signal, SignalDecl, Stmt, Template,
};

use super::Config;

/// Line-oriented Circom writer.
pub(super) struct Writer<'a> {
    config: &'a Config,
    depth: usize,
    output: String,
}

impl<'a> Writer<'a> {
    pub(super) fn new(config: &'a Config) -> Self {
        Self {
            config,
            depth: 0,
            output: String::new(),
        }
    }

    pub(super) fn finish(mut self) -> String {
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }

    /// Write one line at the current depth. Empty lines carry no indentation.
    pub(super) fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.output.push_str(&self.config.indent);
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    pub(super) fn open(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.depth += 1;
    }

    pub(super) fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    pub(super) fn stmts<'s>(&mut self, stmts: impl IntoIterator<Item = &'s Stmt>) {
        for stmt in stmts {
            self.stmt(stmt);
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        let config = self.config;
        match stmt {
            Stmt::DeclareComponents { kind, count } => {
                let window = &config.window;
                self.line(&format!("component {}[{count}][{window}];", kind.array()));
            }
            Stmt::DeclareSignal(decl) => {
                let window = &config.window;
                let text = match decl {
                    SignalDecl::States { nodes } => format!("signal states[{window}+1][{nodes}];"),
                    SignalDecl::Sum => format!("signal final_state_sum[{window}+1];"),
                };
                self.line(&text);
            }
            Stmt::Loop { range, body } => {
                let header = self.loop_header(range);
                self.open(&header);
                self.stmts(body);
                self.close();
            }
            Stmt::Instantiate {
                component,
                template,
            } => {
                let text = format!("{} = {};", self.component(component), template_call(template));
                self.line(&text);
            }
            Stmt::Wire {
                component,
                port,
                value,
            } => {
                let text = format!(
                    "{}.{} <== {};",
                    self.component(component),
                    port_name(port),
                    self.expr(value)
                );
                self.line(&text);
            }
            Stmt::Constrain { target, value } => {
                let text = format!("{} <== {};", self.signal(target), self.expr(value));
                self.line(&text);
            }
            Stmt::Comment(text) => {
                if config.annotate {
                    self.line(&format!("//{text}"));
                }
            }
            Stmt::Blank => self.line(""),
        }
    }

    fn loop_header(&self, range: &LoopRange) -> String {
        let cmp = if range.inclusive { "<=" } else { "<" };
        format!(
            "for (var i = {}; i {cmp} {}; i++)",
            self.bound(&range.start),
            self.bound(&range.end)
        )
    }

    fn bound(&self, bound: &Bound) -> String {
        match bound {
            Bound::Const(n) => n.to_string(),
            Bound::Window => self.config.window.clone(),
        }
    }

    fn row(&self, row: &Row) -> String {
        match row {
            Row::Zero => "0".to_owned(),
            Row::Current => "i".to_owned(),
            Row::Next => "i+1".to_owned(),
            Row::Previous => "i-1".to_owned(),
            Row::Last => self.config.window.clone(),
        }
    }

    fn component(&self, component: &ComponentRef) -> String {
        format!("{}[{}][i]", component.kind.array(), component.index)
    }

    fn signal(&self, signal: &Signal) -> String {
        match signal {
            Signal::State { row, column } => {
                let column = match column {
                    Column::Node(n) => n.to_string(),
                    Column::Var => "i".to_owned(),
                };
                format!("states[{}][{column}]", self.row(row))
            }
            Signal::Sum(row) => format!("final_state_sum[{}]", self.row(row)),
            Signal::Out => "out".to_owned(),
        }
    }

    fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Const(n) => n.to_string(),
            Expr::Byte => "in[i]".to_owned(),
            Expr::Signal(signal) => self.signal(signal),
            Expr::Output(component) => format!("{}.out", self.component(component)),
            Expr::Add(lhs, rhs) => format!("{} + {}", self.expr(lhs), self.expr(rhs)),
        }
    }
}

fn template_call(template: &Template) -> String {
    match template {
        Template::IsEqual => "IsEqual()".to_owned(),
        Template::LessThan { bits } => format!("LessThan({bits})"),
        Template::And => "AND()".to_owned(),
        Template::MultiOr { width } => format!("MultiOR({width})"),
    }
}

fn port_name(port: &Port) -> String {
    match port {
        Port::In(k) => format!("in[{k}]"),
        Port::A => "a".to_owned(),
        Port::B => "b".to_owned(),
    }
}
