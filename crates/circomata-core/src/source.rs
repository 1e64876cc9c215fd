//! The seam between a regex pattern and the automaton built for it.
//!
//! Building a DFA from a pattern is someone else's job. Whatever does it sits
//! behind [`AutomatonSource`] and runs to completion before compilation starts.

use crate::{Automaton, LoadError};

/// Produces the automaton for a pattern.
pub trait AutomatonSource {
    fn load(&self, pattern: &str) -> Result<Automaton, SourceError>;
}

impl<F> AutomatonSource for F
where
    F: Fn(&str) -> Result<Automaton, SourceError>,
{
    fn load(&self, pattern: &str) -> Result<Automaton, SourceError> {
        self(pattern)
    }
}

/// Error while obtaining an automaton from a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to run automaton generator: {0}")]
    Io(#[from] std::io::Error),

    #[error("automaton generator failed: {0}")]
    Generator(String),
}
