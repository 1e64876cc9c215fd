use std::path::PathBuf;

use circomata_compiler::{Compilation, Config};

use super::loader::{GraphInput, Staged, load_automaton, write_output};

pub struct CompileArgs {
    pub input: GraphInput,
    pub output: Option<PathBuf>,
    pub lookup: Option<PathBuf>,
    pub template: Option<String>,
    pub window: String,
    pub annotate: bool,
}

pub fn run(args: CompileArgs) {
    if let Err(msg) = execute(&args) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}

pub(crate) fn execute(args: &CompileArgs) -> Result<(), String> {
    let automaton = load_automaton(&args.input)?;
    let compilation = Compilation::new(&automaton).map_err(|e| e.to_string())?;

    let mut config = Config::new()
        .window(args.window.as_str())
        .annotate(args.annotate);
    if let Some(name) = &args.template {
        config = config.template(name.as_str());
    }

    // Both texts exist before anything is written.
    let circuit = compilation.render(&config);
    let table = compilation.lookup().render();

    // No destination is touched until every file is staged.
    let lookup = args
        .lookup
        .as_deref()
        .map(|path| Staged::write(path, &table))
        .transpose()?;
    let output = args
        .output
        .as_deref()
        .map(|path| Staged::write(path, &circuit))
        .transpose()?;

    if let Some(staged) = output {
        staged.commit()?;
    }
    if let Some(staged) = lookup {
        staged.commit()?;
    }
    if args.output.is_none() {
        write_output(None, &circuit)?;
    }
    Ok(())
}
