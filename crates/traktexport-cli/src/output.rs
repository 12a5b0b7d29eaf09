use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

/// Status messages go to stderr; [`Output::data`] is the only thing on stdout
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.status("success", "✓".green().to_string(), msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => eprintln!("{}", msg.as_ref()),
            _ => self.status_json("info", msg.as_ref()),
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.status("warning", "⚠".yellow().to_string(), msg.as_ref());
    }

    /// Shown even when quiet
    pub fn error(&self, msg: impl AsRef<str>) {
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            _ => self.status_json("error", msg.as_ref()),
        }
    }

    /// Write a document to stdout. Human format prints compact JSON.
    pub fn data<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(value),
            OutputFormat::Human | OutputFormat::Json => serde_json::to_string(value),
        }
    }

    fn status(&self, kind: &str, marker: String, msg: &str) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", marker, msg),
            _ => self.status_json(kind, msg),
        }
    }

    fn status_json(&self, kind: &str, msg: &str) {
        let line = json!({ "type": kind, "message": msg });
        eprintln!("{}", line);
    }
}
