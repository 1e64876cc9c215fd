mod cli;
mod commands;

use cli::{CheckParams, CompileParams, LookupParams, StatsParams, build_cli};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("lookup", m)) => {
            let params = LookupParams::from_matches(m);
            commands::lookup::run(params.into());
        }
        Some(("stats", m)) => {
            let params = StatsParams::from_matches(m);
            commands::stats::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
