//! Per-kind component numbering.

use crate::ir::{ComponentKind, ComponentRef};

/// Number of instances allocated per component kind.
///
/// Each kind is numbered independently, starting at zero, in allocation
/// order. After emission the counts are the exact array sizes to declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentCounts {
    pub eq: usize,
    pub lt: usize,
    pub and: usize,
    pub multi_or: usize,
}

impl ComponentCounts {
    pub fn get(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Eq => self.eq,
            ComponentKind::Lt => self.lt,
            ComponentKind::And => self.and,
            ComponentKind::MultiOr => self.multi_or,
        }
    }

    pub fn total(&self) -> usize {
        self.eq + self.lt + self.and + self.multi_or
    }

    /// Kinds with their counts, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, usize)> + '_ {
        ComponentKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub(crate) fn allocate(&mut self, kind: ComponentKind) -> ComponentRef {
        let slot = match kind {
            ComponentKind::Eq => &mut self.eq,
            ComponentKind::Lt => &mut self.lt,
            ComponentKind::And => &mut self.and,
            ComponentKind::MultiOr => &mut self.multi_or,
        };
        let index = *slot;
        *slot += 1;
        ComponentRef::new(kind, index)
    }
}
