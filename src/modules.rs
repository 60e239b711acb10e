//! Provider extraction: recognize `@Provides` declarations in module
//! files and build the ordered dependency list, including constructor
//! parameters as one-level sub-dependencies.

use std::path::Path;

use regex::{Captures, Regex};

use crate::error::Error;
use crate::types::{Dependency, Module, SymbolRef, file_base_name};

/// Kotlin form: the produced type trails the parameter list after a
/// colon, e.g. `@Provides fun provideClient(cache: Cache): HttpClient`.
/// Group 1 is the raw parameter list, group 2 the produced type.
const KOTLIN_PROVIDES: &str = r#"(?s)(?:@Named\s*\("[^"]*"\)\s*)?@Provides.*?\s+fun\s+.+?\(([^)]*)\)\s*:\s*(\w+(?:\.\w+)*)[\s=]"#;

/// Java form: the produced type leads the declaration name, optionally
/// preceded by `static` and an access modifier, e.g.
/// `@Provides static Resources providesResources(Context context)`.
/// Group 1 is the produced type, group 2 the raw parameter list.
const JAVA_PROVIDES: &str = r#"(?s)(?:@Named\s*\("[^"]*"\)\s*)?@Provides.*?\s(?:static\s+)?(?:protected\s+|public\s+)?(\w+(?:\.\w+)*)\s+\w+\s*\(([^)]*)\)"#;

/// Qualifier marker, searched within a full declaration match span.
/// The captured text is kept exactly, internal whitespace included.
const NAMED_MARKER: &str = r#"@Named\("([A-Za-z0-9_ ]*)"\)"#;

/// One `Type name` pair inside a Java parameter list. Kotlin parameter
/// lists (`name: Type`) never match this shape, so Kotlin declarations
/// yield no sub-dependencies.
const PARAMETER_PAIR: &str = r"(\w+)\s+\w+\s*,?";

/// Which surface form matched a declaration.
enum Form {
    Kotlin,
    Java,
}

/// Build a module from a provider file: name from the file's base
/// name, dependencies extracted from its text.
///
/// # Errors
///
/// Returns `Error::FileRead` if the file cannot be read.
pub fn from_file(path: &Path) -> Result<Module, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(Module {
        name: file_base_name(path),
        dependencies: extract(&text),
    })
}

/// Extract every `@Provides` declaration from one file's text, in
/// source order.
///
/// Works on a consumed working copy: the earliest match of either form
/// is extracted and its span deleted before re-scanning, so an
/// identical later declaration is never matched twice and never
/// skipped. On a tie in start position the Kotlin form wins, because a
/// Kotlin declaration also weakly matches the Java form.
///
/// # Panics
///
/// Panics if a hardcoded pattern is invalid (compile-time invariant).
pub fn extract(text: &str) -> Vec<Dependency> {
    let kotlin = Regex::new(KOTLIN_PROVIDES).expect("valid regex");
    let java = Regex::new(JAVA_PROVIDES).expect("valid regex");
    let named = Regex::new(NAMED_MARKER).expect("valid regex");
    let pair = Regex::new(PARAMETER_PAIR).expect("valid regex");

    let mut working = text.to_string();
    let mut dependencies = Vec::new();

    while let Some((dependency, span)) = next_declaration(&working, &kotlin, &java, &named, &pair)
    {
        dependencies.push(dependency);
        working.replace_range(span, "");
    }

    dependencies
}

/// Find the earliest declaration in the working text and turn it into
/// a dependency plus the byte span to consume.
fn next_declaration(
    working: &str,
    kotlin: &Regex,
    java: &Regex,
    named: &Regex,
    pair: &Regex,
) -> Option<(Dependency, std::ops::Range<usize>)> {
    let kotlin_caps = kotlin.captures(working);
    let java_caps = java.captures(working);

    let (caps, form) = match (kotlin_caps, java_caps) {
        (Some(k), Some(j)) => {
            let k_start = k.get(0).map_or(usize::MAX, |m| m.start());
            let j_start = j.get(0).map_or(usize::MAX, |m| m.start());
            // Kotlin wins ties: a Kotlin declaration also weakly
            // matches the Java form at the same offset.
            if j_start < k_start { (j, Form::Java) } else { (k, Form::Kotlin) }
        },
        (Some(k), None) => (k, Form::Kotlin),
        (None, Some(j)) => (j, Form::Java),
        (None, None) => return None,
    };

    let (type_name, raw_params) = match form {
        Form::Kotlin => (capture_text(&caps, 2), capture_text(&caps, 1)),
        Form::Java => (capture_text(&caps, 1), capture_text(&caps, 2)),
    };

    let full = caps.get(0)?;
    let reference = match named.captures(full.as_str()) {
        Some(n) => SymbolRef::qualified(type_name, capture_text(&n, 1)),
        None => SymbolRef::unqualified(type_name),
    };

    let mut dependency = Dependency::new(reference);
    dependency.sub_dependencies = extract_parameters(&raw_params, pair);

    Some((dependency, full.range()))
}

/// Scan a raw parameter-list text for `Type name` pairs, consuming each
/// matched pair from a working copy so overlapping patterns cannot
/// extract the same parameter twice. Each pair contributes one nested
/// dependency with no qualifier and no sub-dependencies of its own.
fn extract_parameters(raw_params: &str, pair: &Regex) -> Vec<Dependency> {
    let mut working = raw_params.to_string();
    let mut subs = Vec::new();

    while let Some(caps) = pair.captures(&working) {
        let type_name = capture_text(&caps, 1);
        let Some(full) = caps.get(0) else { break };
        let span = full.range();
        subs.push(Dependency::new(SymbolRef::unqualified(type_name)));
        working.replace_range(span, "");
    }

    subs
}

fn capture_text(caps: &Captures<'_>, group: usize) -> String {
    caps.get(group).map_or_else(String::new, |m| m.as_str().to_string())
}
