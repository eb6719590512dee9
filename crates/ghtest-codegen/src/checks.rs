//! Generated-name checks.
//!
//! Sanitizing only replaces spaces, so two labels can map to the same name
//! and a label can still be an illegal identifier. Neither case is repaired:
//! both names are emitted as-is and the problem is reported as a diagnostic
//! so the caller sees why the generated file fails to compile.

use std::collections::BTreeMap;

use ghtest_core::ident::is_csharp_identifier;
use ghtest_core::{Diagnostic, DiscoveryResult, DuplicateScope};

use crate::render::{class_name, method_name};

/// Check class and method names derived from `result`.
///
/// `reserved` lists member names the dialect declares in every test class.
/// A method colliding with one of them, or with its own class name, is
/// reported as a duplicate.
#[must_use]
pub fn check_identifiers(result: &DiscoveryResult, reserved: &[&str]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut classes: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for file in &result.files {
        let class = class_name(&file.display_name);
        if !is_csharp_identifier(&class) {
            diagnostics.push(Diagnostic::InvalidIdentifier {
                identifier: class.clone(),
                label: file.display_name.clone(),
            });
        }
        classes
            .entry(class.clone())
            .or_default()
            .push(file.path.display().to_string());

        let mut methods: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for grouping in &file.groupings {
            let method = method_name(&grouping.label);
            if !is_csharp_identifier(&method) {
                diagnostics.push(Diagnostic::InvalidIdentifier {
                    identifier: method.clone(),
                    label: grouping.label.clone(),
                });
            }
            methods
                .entry(method)
                .or_default()
                .push(format!("{}: {}", file.path.display(), grouping.label));
        }

        for (method, mut sources) in methods {
            if method == class || reserved.contains(&method.as_str()) {
                sources.push(format!("generated member of {class}"));
            }
            if sources.len() > 1 {
                diagnostics.push(Diagnostic::DuplicateIdentifier {
                    scope: DuplicateScope::Method,
                    identifier: method,
                    sources,
                });
            }
        }
    }

    for (class, sources) in classes {
        if sources.len() > 1 {
            diagnostics.push(Diagnostic::DuplicateIdentifier {
                scope: DuplicateScope::Class,
                identifier: class,
                sources,
            });
        }
    }

    diagnostics
}
