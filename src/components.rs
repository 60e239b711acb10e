//! Consumer extraction: which modules a component declaration lists
//! and which concrete types its `inject(...)` entry points target.

use std::path::Path;

use regex::Regex;

use crate::error::Error;
use crate::types::{Component, Module, file_base_name};

/// A module listed in a component declaration: `AppModule.class`
/// (Java) or `AppModule::class` (Kotlin).
const MODULE_LISTING: &str = r"(\w+)(?:\.|::)class";

/// A method-level injection entry point: `void inject(Target t)` or
/// `fun inject(t: Target)`.
const INJECT_ENTRY: &str = r"(?:void|fun)\s*inject\s*\(\s*(?:\w+\s*:\s*)?([A-Za-z_]\w*)";

/// Build a component from a consumer file, resolving its listed module
/// names against the already-built (and linked) modules.
///
/// # Errors
///
/// Returns `Error::FileRead` if the file cannot be read.
pub fn from_file(path: &Path, all_modules: &[Module]) -> Result<Component, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(Component {
        name: file_base_name(path),
        modules: listed_modules(&text, all_modules),
        injected_targets: injected_targets(&text),
    })
}

/// Find every module listing in the component text and resolve each by
/// exact name against the built modules. A name with no matching
/// module is silently dropped; repeated listings produce repeated
/// entries.
///
/// # Panics
///
/// Panics if the hardcoded pattern is invalid (compile-time invariant).
pub fn listed_modules(text: &str, all_modules: &[Module]) -> Vec<Module> {
    let pattern = Regex::new(MODULE_LISTING).expect("valid regex");

    let mut listed = Vec::new();
    for caps in pattern.captures_iter(text) {
        let name = &caps[1];
        for module in all_modules {
            if module.name == name {
                listed.push(module.clone());
            }
        }
    }

    listed
}

/// Collect the bare type name argument of every injection entry point,
/// in source order.
///
/// # Panics
///
/// Panics if the hardcoded pattern is invalid (compile-time invariant).
pub fn injected_targets(text: &str) -> Vec<String> {
    let pattern = Regex::new(INJECT_ENTRY).expect("valid regex");
    pattern
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str) -> Module {
        Module { name: name.to_string(), dependencies: Vec::new() }
    }

    #[test]
    fn java_component_lists_modules_by_class_literal() {
        let text = "\
@Component(modules = {AppModule.class, NetModule.class})
public interface AppComponent {
    void inject(MainActivity activity);
}
";
        let all = [module("AppModule"), module("NetModule")];
        let listed = listed_modules(text, &all);

        let names: Vec<&str> = listed.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["AppModule", "NetModule"]);
    }

    #[test]
    fn kotlin_component_lists_modules_by_double_colon_class() {
        let text = "\
@Component(modules = [AppModule::class])
interface AppComponent {
    fun inject(activity: MainActivity)
}
";
        let listed = listed_modules(text, &[module("AppModule")]);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "AppModule");
    }

    #[test]
    fn unmatched_module_names_are_silently_dropped() {
        let text = "@Component(modules = {AppModule.class, GhostModule.class})";
        let listed = listed_modules(text, &[module("AppModule")]);

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "AppModule");
    }

    #[test]
    fn repeated_listings_produce_repeated_entries() {
        let text = "@Component(modules = {AppModule.class})\n// also: AppModule.class";
        let listed = listed_modules(text, &[module("AppModule")]);
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn injected_targets_cover_both_dialects() {
        let java = "void inject(MainActivity activity);";
        assert_eq!(injected_targets(java), ["MainActivity"]);

        let kotlin = "fun inject(fragment: LoginFragment)";
        assert_eq!(injected_targets(kotlin), ["LoginFragment"]);
    }

    #[test]
    fn injected_targets_keep_source_order() {
        let text = "\
interface AppComponent {
    void inject(MainActivity activity);
    void inject(SettingsActivity activity);
}
";
        assert_eq!(injected_targets(text), ["MainActivity", "SettingsActivity"]);
    }

    #[test]
    fn component_without_listings_or_entry_points_is_empty() {
        let text = "@Component\ninterface BareComponent {}";
        assert!(listed_modules(text, &[module("AppModule")]).is_empty());
        assert!(injected_targets(text).is_empty());
    }
}
