use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

use circomata_core::{Automaton, AutomatonSource, SourceError};

/// Where a command reads its automaton from.
#[derive(Debug, Clone, Default)]
pub struct GraphInput {
    pub graph_path: Option<PathBuf>,
    pub pattern: Option<String>,
    pub generator: Option<String>,
}

/// External program that turns a pattern into automaton JSON on stdout.
#[derive(Debug, Clone)]
pub struct GeneratorCommand {
    program: String,
    args: Vec<String>,
}

impl GeneratorCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a command line on whitespace. No quoting.
    pub fn parse(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace();
        let program = words.next()?;
        Some(Self::new(program, words))
    }
}

impl AutomatonSource for GeneratorCommand {
    fn load(&self, pattern: &str) -> Result<Automaton, SourceError> {
        log::debug!("running generator {} {:?}", self.program, self.args);
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(pattern)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let detail = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {stderr}", output.status)
            };
            return Err(SourceError::Generator(detail));
        }

        let json = String::from_utf8_lossy(&output.stdout);
        Ok(Automaton::from_json(&json)?)
    }
}

pub fn load_automaton(input: &GraphInput) -> Result<Automaton, String> {
    if let Some(pattern) = &input.pattern {
        let command = input
            .generator
            .as_deref()
            .and_then(GeneratorCommand::parse)
            .ok_or("a pattern needs --generator to build its automaton")?;
        return command.load(pattern).map_err(|e| e.to_string());
    }

    if let Some(path) = &input.graph_path {
        let json = if path.as_os_str() == "-" {
            load_stdin()?
        } else {
            load_file(path)?
        };
        return Automaton::from_json(&json).map_err(|e| e.to_string());
    }

    Err("automaton is required: use a GRAPH file, - for stdin, or -p/--pattern".to_string())
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<(), String> {
    match path {
        Some(path) => fs::write(path, text).map_err(|e| write_error(path, e)),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn write_error(path: &Path, err: io::Error) -> String {
    format!("failed to write '{}': {}", path.display(), err)
}

/// Output written next to its destination, moved into place by [`Staged::commit`].
///
/// The staging file is removed if the value is dropped uncommitted.
#[derive(Debug)]
pub struct Staged {
    staging: PathBuf,
    path: PathBuf,
    committed: bool,
}

impl Staged {
    pub fn write(path: &Path, text: &str) -> Result<Self, String> {
        let mut name = OsString::from(".");
        name.push(path.file_name().unwrap_or_default());
        name.push(".tmp");
        let staging = path.with_file_name(name);

        fs::write(&staging, text).map_err(|e| write_error(path, e))?;
        Ok(Self {
            staging,
            path: path.to_path_buf(),
            committed: false,
        })
    }

    pub fn commit(mut self) -> Result<(), String> {
        fs::rename(&self.staging, &self.path).map_err(|e| write_error(&self.path, e))?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for Staged {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.staging);
        }
    }
}
