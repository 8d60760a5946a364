//! User-facing diagnostics for libpolydrill errors.
//!
//! Every [`Error`](crate::Error) maps to a [`Diagnostic`] carrying a stable code. The long-form
//! explanation of each code is registered through a [`DiagnosticRegistry`] so that front ends can
//! explain a code on request.

use crate::errors::{ArithmeticError, ConfigError, Error, ParseError, PolydrillErrors};

use std::collections::HashMap;

/// The kind of a polydrill diagnostic.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DiagnosticKind {
    /// An error diagnostic. Emitted when problem generation cannot complete.
    Error,
    /// A note diagnostic is a generic annotation expanding on a primary diagnostic.
    Note,
    /// A help diagnostic should instruct the user how to change their input so that generation
    /// succeeds.
    Help,
}

/// A secondary diagnostic associated with a primary `Diagnostic`.
#[derive(Clone, Debug)]
pub struct AssociatedDiagnostic {
    pub kind: DiagnosticKind,
    pub msg: String,
}

/// A diagnostic describing a failed polydrill operation.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub title: String,
    pub code: Option<&'static str>,
    pub associated_diagnostics: Vec<AssociatedDiagnostic>,
}

/// A diagnostic code and its explanation.
pub trait DiagnosticRecord {
    /// Diagnostic code, like "E0001".
    const CODE: &'static str;
    /// Long-form explanation of the diagnostic.
    const EXPLANATION: &'static str;
}

/// A collection of [`DiagnosticRecord`]s.
pub trait DiagnosticRegistry {
    fn codes_with_explanations() -> Vec<(&'static str, &'static str)>;
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub(crate) fn err<M>(title: M, code: &'static str) -> Diagnostic
    where
        M: Into<String>,
    {
        Diagnostic {
            kind: DiagnosticKind::Error,
            title: title.into(),
            code: Some(code),
            associated_diagnostics: Vec::with_capacity(2),
        }
    }

    /// Adds a note to the diagnostic.
    pub(crate) fn with_note<M>(mut self, note: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Note,
            msg: note.into(),
        });
        self
    }

    /// Adds a help message to the diagnostic.
    pub(crate) fn with_help<M>(mut self, help: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Help,
            msg: help.into(),
        });
        self
    }

    /// Returns every diagnostic code libpolydrill can emit, mapped to its explanation.
    pub fn all_codes_with_explanations() -> HashMap<&'static str, String> {
        PolydrillErrors::codes_with_explanations()
            .into_iter()
            .map(|(code, explanation)| (code, explanation.to_owned()))
            .collect()
    }
}

impl From<&Error> for Diagnostic {
    fn from(error: &Error) -> Self {
        let diagnostic = Diagnostic::err(error.to_string(), error.code());
        match error {
            Error::Arithmetic(ArithmeticError::DivisionByZero)
            | Error::Parse(ParseError::Arithmetic(ArithmeticError::DivisionByZero)) => diagnostic
                .with_note("problem generation was aborted; no problems were produced"),
            Error::Arithmetic(ArithmeticError::Overflow)
            | Error::Parse(ParseError::Arithmetic(ArithmeticError::Overflow)) => diagnostic
                .with_note("problem generation was aborted; no problems were produced")
                .with_help("narrow the value bounds or lower the maximum degree"),
            Error::Parse(ParseError::MalformedValueText(_)) => diagnostic.with_help(
                r#"values are written as an integer like "-3", "\frac{1}{2}", or "1/2""#,
            ),
            Error::Config(ConfigError::InvertedRange { bound, .. }) => {
                diagnostic.with_help(format!("the {} minimum must not exceed its maximum", bound))
            }
            Error::Config(ConfigError::ExceedsLimit { what, limit, .. }) => {
                diagnostic.with_help(format!("configure a {} of at most {}", what, limit))
            }
        }
    }
}

impl From<Error> for Diagnostic {
    fn from(error: Error) -> Self {
        Diagnostic::from(&error)
    }
}
