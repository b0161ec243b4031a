//! cero-drv - The build driver.
//!
//! Wires the pipeline together for the `cero` binary: loads a source file,
//! runs the lexer and parser, and routes diagnostics to the console. The
//! only result the driver cares about is [`cero_util::Reporter::has_errors`].

use std::fs;
use std::io;
use std::path::Path;

use cero_par::parse_source;
use cero_util::{
    CodeLocation, Diagnostic, Message, MessageArgs, Reporter, ReporterState, Source, SourceError,
    DEFAULT_TAB_SIZE,
};

/// Build options that affect the front end.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Tab width used for diagnostic columns.
    pub tab_size: u8,
    /// Whether warnings fail the build.
    pub warnings_as_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
            warnings_as_errors: false,
        }
    }
}

/// A reporter that prints each diagnostic to stderr as it arrives, in the
/// canonical `file:line:column: severity: text` form.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    state: ReporterState,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for ConsoleReporter {
    fn state(&self) -> &ReporterState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ReporterState {
        &mut self.state
    }

    fn handle_report(&mut self, diagnostic: Diagnostic) {
        eprintln!(
            "{}: {}: {}",
            diagnostic.location, diagnostic.severity, diagnostic.text
        );
    }
}

/// Loads a source file, mapping the interesting I/O failures onto
/// [`SourceError`].
pub fn load_source(path: &str, config: &Config) -> Result<Source, SourceError> {
    match fs::read_to_string(Path::new(path)) {
        Ok(text) => Ok(Source::with_tab_size(path, text, config.tab_size)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Err(SourceError::NotFound {
            path: path.to_owned(),
        }),
        Err(error) => Err(SourceError::CouldNotOpen {
            path: path.to_owned(),
            source: error,
        }),
    }
}

/// Builds a single source, reporting through `reporter`. Returns true when
/// the build succeeded.
pub fn build_source(source: &Source, config: &Config, reporter: &mut dyn Reporter) -> bool {
    reporter.set_warnings_as_errors(config.warnings_as_errors);
    let _ast = parse_source(source, reporter);
    !reporter.has_errors()
}

/// Loads and builds the file at `path`. File-system failures become
/// `FileNotFound` / `CouldNotOpenFile` diagnostics located at the input as
/// a whole.
pub fn build_file(path: &str, config: &Config, reporter: &mut dyn Reporter) -> bool {
    match load_source(path, config) {
        Ok(source) => build_source(&source, config, reporter),
        Err(error) => {
            let location = CodeLocation::new(path, 0, 0);
            match error {
                SourceError::NotFound { .. } => {
                    reporter.report(Message::FileNotFound, location, MessageArgs::none());
                }
                SourceError::CouldNotOpen { .. } => {
                    let code = error.os_code();
                    reporter.report(Message::CouldNotOpenFile, location, MessageArgs::one(code));
                }
            }
            false
        }
    }
}
