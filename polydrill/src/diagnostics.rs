//! User-facing polydrill diagnostics.
//!
//! The diagnostics module demarshalls [libpolydrill diagnostics][libpolydrill::diagnostics] into
//! a form pleasant for standard error.

use libpolydrill::diagnostics::{AssociatedDiagnostic, Diagnostic, DiagnosticKind};

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Snippet},
};

pub fn emit_polydrill_diagnostics(diagnostics: &[Diagnostic], color: bool) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }

    let last_i = diagnostics.len() - 1;
    let mut emitted_diagnostics = String::new();

    for (i, diagnostic) in diagnostics.iter().enumerate() {
        // Diagnostics are not tied to any source text, so associated diagnostics all go to the
        // footer.
        let footer = diagnostic
            .associated_diagnostics
            .iter()
            .map(convert_associated_diagnostic)
            .collect();

        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(&diagnostic.title),
                id: diagnostic.code,
                annotation_type: convert_diagnostic_kind(&diagnostic.kind),
            }),
            footer,
            slices: vec![],
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        };
        let suffix = if i != last_i { "\n" } else { "" };
        emitted_diagnostics.push_str(&format!("{}\n{}", DisplayList::from(snippet), suffix));
    }
    emitted_diagnostics
}

/// Converts a polydrill AssociatedDiagnostic to a footer Annotation.
fn convert_associated_diagnostic(diagnostic: &AssociatedDiagnostic) -> Annotation {
    Annotation {
        label: Some(&diagnostic.msg),
        id: None,
        annotation_type: convert_diagnostic_kind(&diagnostic.kind),
    }
}

/// Converts a polydrill DiagnosticKind to an AnnotationType.
fn convert_diagnostic_kind(diagnostic_kind: &DiagnosticKind) -> AnnotationType {
    match diagnostic_kind {
        DiagnosticKind::Error => AnnotationType::Error,
        DiagnosticKind::Note => AnnotationType::Note,
        DiagnosticKind::Help => AnnotationType::Help,
    }
}
