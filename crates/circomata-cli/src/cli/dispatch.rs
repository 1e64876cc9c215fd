//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::loader::GraphInput;
use crate::commands::lookup::LookupArgs;
use crate::commands::stats::StatsArgs;

pub struct CompileParams {
    pub graph_path: Option<PathBuf>,
    pub pattern: Option<String>,
    pub generator: Option<String>,
    pub output: Option<PathBuf>,
    pub lookup: Option<PathBuf>,
    pub template: Option<String>,
    pub window: String,
    pub annotate: bool,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: m.get_one::<PathBuf>("graph_path").cloned(),
            pattern: m.get_one::<String>("pattern").cloned(),
            generator: m.get_one::<String>("generator").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            lookup: m.get_one::<PathBuf>("lookup").cloned(),
            template: m.get_one::<String>("template").cloned(),
            window: parse_window(m),
            annotate: m.get_flag("annotate"),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            input: GraphInput {
                graph_path: p.graph_path,
                pattern: p.pattern,
                generator: p.generator,
            },
            output: p.output,
            lookup: p.lookup,
            template: p.template,
            window: p.window,
            annotate: p.annotate,
        }
    }
}

pub struct CheckParams {
    pub graph_path: Option<PathBuf>,
    pub pattern: Option<String>,
    pub generator: Option<String>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: m.get_one::<PathBuf>("graph_path").cloned(),
            pattern: m.get_one::<String>("pattern").cloned(),
            generator: m.get_one::<String>("generator").cloned(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: GraphInput {
                graph_path: p.graph_path,
                pattern: p.pattern,
                generator: p.generator,
            },
        }
    }
}

pub struct LookupParams {
    pub graph_path: Option<PathBuf>,
    pub pattern: Option<String>,
    pub generator: Option<String>,
    pub output: Option<PathBuf>,
}

impl LookupParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: m.get_one::<PathBuf>("graph_path").cloned(),
            pattern: m.get_one::<String>("pattern").cloned(),
            generator: m.get_one::<String>("generator").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<LookupParams> for LookupArgs {
    fn from(p: LookupParams) -> Self {
        Self {
            input: GraphInput {
                graph_path: p.graph_path,
                pattern: p.pattern,
                generator: p.generator,
            },
            output: p.output,
        }
    }
}

pub struct StatsParams {
    pub graph_path: Option<PathBuf>,
    pub pattern: Option<String>,
    pub generator: Option<String>,
}

impl StatsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: m.get_one::<PathBuf>("graph_path").cloned(),
            pattern: m.get_one::<String>("pattern").cloned(),
            generator: m.get_one::<String>("generator").cloned(),
        }
    }
}

impl From<StatsParams> for StatsArgs {
    fn from(p: StatsParams) -> Self {
        Self {
            input: GraphInput {
                graph_path: p.graph_path,
                pattern: p.pattern,
                generator: p.generator,
            },
        }
    }
}

fn parse_window(m: &ArgMatches) -> String {
    m.get_one::<String>("window")
        .cloned()
        .unwrap_or_else(|| "num_bytes".to_owned())
}
