//! Field-injection extraction: find every `@Inject`-marked field in a
//! file and the corpus-wide index mapping each injected symbol to the
//! ordered set of files observing it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::types::SymbolRef;

/// Both field-injection dialects as one composite pattern,
/// disambiguated post-hoc by which capture group matched:
///
/// - annotation-before-declaration: Java `@Inject Foo field;` (group 1,
///   the leading type; the field name must be terminated by `;` or `=`,
///   which rules out constructors and methods) and Kotlin
///   `@Inject lateinit var field: Foo` (group 2, the trailing type);
/// - attribute-as-list-element: Kotlin `@field:[Inject] var field: Foo`
///   (group 3, the trailing type).
const FIELD_INJECTION: &str = r"(?s)(?:@Inject\b.*?\s+(?:(?:protected|public|private|internal|lateinit)\s+)*(?:(\w+(?:\.\w+)*)\s+\w+\s*[;=]|var\s+\w+\s*:\s*(\w+(?:\.\w+)*))|@field\s*:\s*\[[^\]]*Inject[^\]]*\]\s*(?:(?:protected|public|private|internal|lateinit)\s+)*var\s+\w+\s*:\s*(\w+(?:\.\w+)*))";

/// Qualifier marker, searched within a full injection match span. The
/// leading `@` is optional: annotations inside a `@field:[...]` list
/// are written without it.
const NAMED_MARKER: &str = r#"@?Named\("([A-Za-z0-9_ ]*)"\)"#;

/// Extract every field-injection declaration from one file's text.
/// Matches are non-overlapping and collected in source order; the same
/// symbol may appear more than once when injected into several fields.
///
/// # Panics
///
/// Panics if a hardcoded pattern is invalid (compile-time invariant).
pub fn extract(text: &str) -> Vec<SymbolRef> {
    let pattern = Regex::new(FIELD_INJECTION).expect("valid regex");
    let named = Regex::new(NAMED_MARKER).expect("valid regex");

    let mut references = Vec::new();
    for caps in pattern.captures_iter(text) {
        // Exactly one of the three dialect groups holds the type.
        let name = match caps.get(1).or(caps.get(2)).or(caps.get(3)) {
            Some(m) => m.as_str(),
            None => continue,
        };

        let Some(full) = caps.get(0) else { continue };
        let reference = match named.captures(full.as_str()) {
            Some(n) => SymbolRef::qualified(name, &n[1]),
            None => SymbolRef::unqualified(name),
        };
        references.push(reference);
    }

    references
}

/// Corpus-wide mapping from injected symbol to the files observing it.
/// Keyed by the full `SymbolRef` (name, qualifier) pair rather than a
/// joined string, so qualifier text can never corrupt the key, with
/// insertion-ordered iteration for reproducible output. Duplicate
/// files per symbol are suppressed.
#[derive(Debug, Default)]
pub struct InjectionIndex {
    order: Vec<SymbolRef>,
    sites: HashMap<SymbolRef, Vec<PathBuf>>,
}

impl InjectionIndex {
    /// An empty index.
    pub fn new() -> Self {
        Self { order: Vec::new(), sites: HashMap::new() }
    }

    /// Record that `path` injects `reference`. First observation of a
    /// symbol fixes its position in iteration order.
    pub fn record(&mut self, reference: SymbolRef, path: &Path) {
        if !self.sites.contains_key(&reference) {
            self.order.push(reference.clone());
        }

        let paths = self.sites.entry(reference).or_default();
        let path = path.to_path_buf();
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    /// The files observed injecting `reference`, in observation order.
    /// Empty when the symbol was never seen.
    pub fn sites(&self, reference: &SymbolRef) -> &[PathBuf] {
        self.sites.get(reference).map_or(&[], Vec::as_slice)
    }

    /// Iterate symbols in first-observation order.
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolRef, &[PathBuf])> {
        self.order.iter().map(move |r| (r, self.sites(r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_field_injection_takes_the_leading_type() {
        let text = "\
public class MainActivity {
    @Inject
    SharedPreferences prefs;
}
";
        assert_eq!(extract(text), [SymbolRef::unqualified("SharedPreferences")]);
    }

    #[test]
    fn java_access_modifiers_are_skipped() {
        let text = "@Inject public Repository repository;";
        assert_eq!(extract(text), [SymbolRef::unqualified("Repository")]);
    }

    #[test]
    fn kotlin_lateinit_var_takes_the_trailing_type() {
        let text = "\
class MainActivity {
    @Inject
    lateinit var prefs: SharedPreferences
}
";
        assert_eq!(extract(text), [SymbolRef::unqualified("SharedPreferences")]);
    }

    #[test]
    fn field_attribute_dialect_is_recognized() {
        let text = "@field:[Inject] var dataManager: DataManager";
        assert_eq!(extract(text), [SymbolRef::unqualified("DataManager")]);
    }

    #[test]
    fn field_attribute_qualifier_needs_no_leading_at() {
        let text = "@field:[Inject Named(\"auth\")] var client: HttpClient";
        assert_eq!(extract(text), [SymbolRef::qualified("HttpClient", "auth")]);
    }

    #[test]
    fn qualifier_within_the_match_span_is_appended() {
        let text = "\
class Screen {
    @Inject
    @Named(\"cached\")
    Repository repository;
}
";
        assert_eq!(extract(text), [SymbolRef::qualified("Repository", "cached")]);
    }

    #[test]
    fn multiple_sites_in_one_file_are_all_collected() {
        let text = "\
class MainActivity {
    @Inject SharedPreferences prefs;
    @Inject lateinit var repo: Repository
}
";
        let found = extract(text);
        assert_eq!(
            found,
            [
                SymbolRef::unqualified("SharedPreferences"),
                SymbolRef::unqualified("Repository"),
            ]
        );
    }

    #[test]
    fn constructor_injection_is_not_a_field_site() {
        let text = "\
class MainPresenter {
    @Inject
    public MainPresenter(Repository repo) {
        this.repo = repo;
    }
}
";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn kotlin_constructor_injection_is_not_a_field_site() {
        let text = "class MainPresenter @Inject constructor(private val repo: Repository)";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn index_preserves_insertion_order_and_deduplicates_paths() {
        let mut index = InjectionIndex::new();
        let context = SymbolRef::unqualified("Context");
        let prefs = SymbolRef::unqualified("SharedPreferences");

        index.record(context.clone(), Path::new("a/Main.java"));
        index.record(prefs.clone(), Path::new("a/Main.java"));
        index.record(context.clone(), Path::new("a/Main.java"));
        index.record(context.clone(), Path::new("b/Other.kt"));

        assert_eq!(index.sites(&context), [PathBuf::from("a/Main.java"), PathBuf::from("b/Other.kt")]);

        let keys: Vec<&SymbolRef> = index.iter().map(|(r, _)| r).collect();
        assert_eq!(keys, [&context, &prefs]);
    }

    #[test]
    fn unseen_symbol_has_no_sites() {
        let index = InjectionIndex::new();
        assert!(index.sites(&SymbolRef::unqualified("Ghost")).is_empty());
    }
}
