//! Configuration types for Circom rendering.

/// Configuration for Circom rendering.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the window-size parameter
    pub(crate) window: String,
    /// Wrap the body in a complete template with this name
    pub(crate) template: Option<String>,
    /// Emit class and character comments in front of the checks
    pub(crate) annotate: bool,
    /// Indentation unit
    pub(crate) indent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: "num_bytes".to_owned(),
            template: None,
            annotate: false,
            indent: "\t".to_owned(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window-size parameter name.
    pub fn window(mut self, name: impl Into<String>) -> Self {
        self.window = name.into();
        self
    }

    /// Render a complete file with a template of this name.
    pub fn template(mut self, name: impl Into<String>) -> Self {
        self.template = Some(name.into());
        self
    }

    /// Set whether to emit comments in front of the checks.
    pub fn annotate(mut self, value: bool) -> Self {
        self.annotate = value;
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, unit: impl Into<String>) -> Self {
        self.indent = unit.into();
        self
    }
}
