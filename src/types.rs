/// Core domain types for the Dagger wiring model: symbol references,
/// provided dependencies, modules, and components.
use std::path::PathBuf;

use serde::Serialize;

/// A resolved identifier used throughout the model: a bare type name
/// plus an optional `@Named` qualifier. Two references are the same
/// symbol iff both the name and the qualifier match (both absent, or
/// both present and equal). This composite is the lookup key everywhere
/// linking occurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SymbolRef {
    /// Bare type identifier, e.g. `SharedPreferences`.
    pub name: String,
    /// Disambiguating `@Named("...")` string, absent when unqualified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
}

impl SymbolRef {
    /// A reference with no qualifier.
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self { name: name.into(), qualifier: None }
    }

    /// A reference carrying a `@Named` qualifier.
    pub fn qualified(name: impl Into<String>, qualifier: impl Into<String>) -> Self {
        Self { name: name.into(), qualifier: Some(qualifier.into()) }
    }

    /// Render as `Name` or `Name ("qualifier")` for reports.
    pub fn display_key(&self) -> String {
        match &self.qualifier {
            Some(q) => format!("{} (\"{q}\")", self.name),
            None => self.name.clone(),
        }
    }
}

/// One constructible value declared by a module via `@Provides`.
#[derive(Debug, Clone, Serialize)]
pub struct Dependency {
    /// The provided symbol, including its qualifier if declared.
    pub reference: SymbolRef,
    /// Constructor/factory parameters required to build this value,
    /// one level deep only; parameters of parameters are not expanded.
    pub sub_dependencies: Vec<Dependency>,
    /// Files where this symbol is consumed via field injection.
    /// Starts empty; populated only by the linker, append-only.
    pub injection_sites: Vec<PathBuf>,
}

impl Dependency {
    /// A dependency with no sub-dependencies and no linked sites yet.
    pub fn new(reference: SymbolRef) -> Self {
        Self {
            reference,
            sub_dependencies: Vec::new(),
            injection_sites: Vec::new(),
        }
    }

    /// Record a file that injects this dependency's symbol.
    /// Duplicate paths are suppressed, which makes linking idempotent.
    pub fn add_injection_site(&mut self, path: PathBuf) {
        if !self.injection_sites.contains(&path) {
            self.injection_sites.push(path);
        }
    }
}

/// A provider: one source file annotated `@Module`, carrying its
/// `@Provides` declarations in source order.
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    /// Derived from the file's base name, e.g. `AppModule`.
    pub name: String,
    /// Provided dependencies, one per declaration, in source order.
    pub dependencies: Vec<Dependency>,
}

/// A consumer: one source file annotated `@Component` or
/// `@Subcomponent`, listing the modules it includes and the concrete
/// types it injects into.
#[derive(Debug, Clone, Serialize)]
pub struct Component {
    /// Derived from the file's base name, e.g. `AppComponent`.
    pub name: String,
    /// Modules listed in the component declaration that matched a
    /// built module by name. One entry per listing occurrence.
    pub modules: Vec<Module>,
    /// Bare type names passed to `inject(...)` entry points, in
    /// source order.
    pub injected_targets: Vec<String>,
}

/// Derive an entity name from a file path: the base name without its
/// extension. `app/src/di/AppModule.java` names the module `AppModule`.
/// Stable and independent of declaration order inside the file.
pub fn file_base_name(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_base_name_strips_directories_and_extension() {
        assert_eq!(file_base_name(std::path::Path::new("app/di/AppModule.java")), "AppModule");
        assert_eq!(file_base_name(std::path::Path::new("NetModule.kt")), "NetModule");
    }

    #[test]
    fn symbol_identity_requires_matching_qualifier() {
        let plain = SymbolRef::unqualified("String");
        let named_a = SymbolRef::qualified("String", "A");
        let named_b = SymbolRef::qualified("String", "B");

        assert_eq!(plain, SymbolRef::unqualified("String"));
        assert_eq!(named_a, SymbolRef::qualified("String", "A"));
        assert_ne!(plain, named_a);
        assert_ne!(named_a, named_b);
    }

    #[test]
    fn duplicate_injection_sites_are_suppressed() {
        let mut dep = Dependency::new(SymbolRef::unqualified("Context"));
        dep.add_injection_site(PathBuf::from("a/Main.java"));
        dep.add_injection_site(PathBuf::from("a/Main.java"));
        dep.add_injection_site(PathBuf::from("b/Other.kt"));

        assert_eq!(dep.injection_sites.len(), 2);
    }

    #[test]
    fn qualifier_is_omitted_from_json_when_absent() {
        let plain = serde_json::to_string(&SymbolRef::unqualified("Context")).unwrap();
        assert!(!plain.contains("qualifier"));

        let named = serde_json::to_string(&SymbolRef::qualified("String", "tag")).unwrap();
        assert!(named.contains("\"qualifier\":\"tag\""));
    }
}
