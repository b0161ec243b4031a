//! The reporter contract shared by all compiler phases.
//!
//! Phases never print or store diagnostics themselves; they call
//! [`Reporter::report`] with a message kind, a location and the message
//! arguments. The reporter derives the severity from the catalog, applies
//! the warnings-as-errors policy, latches the error flag, formats the text
//! and hands the finalized record to the implementation's sink.
//!
//! [`Reporter::has_errors`] is the only signal the pipeline ever reads back.

use crate::location::CodeLocation;
use crate::message::{Message, MessageArgs, Severity};

/// A finalized diagnostic record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: Message,
    pub severity: Severity,
    pub location: CodeLocation,
    pub text: String,
}

/// Policy state every reporter carries: the latched error flag and the
/// warnings-as-errors toggle.
#[derive(Debug, Default)]
pub struct ReporterState {
    has_error_reports: bool,
    warnings_as_errors: bool,
}

/// The sink the lexer, parser and driver report diagnostics through.
///
/// Implementations provide storage or output by implementing
/// [`Reporter::handle_report`] and embedding a [`ReporterState`]; the
/// policy logic lives in the provided [`Reporter::report`] method.
pub trait Reporter {
    /// Access to the shared policy state.
    fn state(&self) -> &ReporterState;

    /// Mutable access to the shared policy state.
    fn state_mut(&mut self) -> &mut ReporterState;

    /// Receives a finalized diagnostic. Implementations decide what to do
    /// with it; they must not fail back into the compiler.
    fn handle_report(&mut self, diagnostic: Diagnostic);

    /// Reports a diagnostic of the given kind at the given location.
    ///
    /// The argument count must match the placeholder count of the message's
    /// format string; a mismatch is a programming error.
    fn report(&mut self, message: Message, location: CodeLocation, args: MessageArgs) {
        debug_assert!(
            args.matches_placeholders_of(message),
            "wrong number of arguments for {message:?}"
        );

        let mut severity = message.severity();
        if severity == Severity::Warning && self.state().warnings_as_errors {
            severity = Severity::Error;
        }
        if severity == Severity::Error {
            self.state_mut().has_error_reports = true;
        }

        let text = args.format_message(message);
        self.handle_report(Diagnostic {
            message,
            severity,
            location,
            text,
        });
    }

    /// Whether any report has finalized at [`Severity::Error`].
    fn has_errors(&self) -> bool {
        self.state().has_error_reports
    }

    /// Toggles upgrading warnings to errors for subsequent reports.
    fn set_warnings_as_errors(&mut self, value: bool) {
        self.state_mut().warnings_as_errors = value;
    }
}

/// A reporter that stores diagnostics in the order they were reported.
/// Used by the driver (which prints them once the build finishes) and
/// throughout the test suites.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    state: ReporterState,
    diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The diagnostics collected so far, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl Reporter for CollectingReporter {
    fn state(&self) -> &ReporterState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ReporterState {
        &mut self.state
    }

    fn handle_report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
