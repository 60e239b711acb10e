//! Report rendering: the wiring model as markdown-flavored text or
//! pretty JSON. Serialization lives here, not in the model.

use std::fmt::Write as _;

use serde::Serialize;

use crate::analyzer::Analysis;
use crate::types::{Dependency, Module};

/// A provided dependency that no scanned file injects.
#[derive(Debug, Serialize)]
pub struct UnusedDependency {
    /// The module providing the dependency.
    pub module: String,
    /// The dependency's display key, qualifier included.
    pub dependency: String,
}

/// Render the full graph: components, their modules, and each
/// module's provided dependencies with linked injection sites.
pub fn render_graph(analysis: &Analysis) -> String {
    let mut out = String::from("# Wiring graph\n");

    if analysis.components.is_empty() {
        out.push_str("\nNo components found.\n");
    }

    for component in &analysis.components {
        let _ = write!(out, "\n## {}\n", component.name);

        if !component.injected_targets.is_empty() {
            let targets = component.injected_targets.join(", ");
            let _ = write!(out, "\nInjects: {targets}\n");
        }

        if component.modules.is_empty() {
            out.push_str("\n(no modules matched)\n");
        }
        for module in &component.modules {
            let _ = write!(out, "\n### {}\n\n", module.name);
            render_dependencies(&mut out, module);
        }
    }

    out
}

/// Render every module with its dependencies and injection sites,
/// without the component layer.
pub fn render_modules(modules: &[Module]) -> String {
    let mut out = String::from("# Modules\n");

    if modules.is_empty() {
        out.push_str("\nNo modules found.\n");
    }

    for module in modules {
        let _ = write!(out, "\n## {}\n\n", module.name);
        render_dependencies(&mut out, module);
    }

    out
}

fn render_dependencies(out: &mut String, module: &Module) {
    if module.dependencies.is_empty() {
        out.push_str("(no provided dependencies)\n");
        return;
    }

    for dependency in &module.dependencies {
        let _ = writeln!(out, "- {}", heading(dependency));
        for site in &dependency.injection_sites {
            let _ = writeln!(out, "  - site: {}", site.display());
        }
    }
}

/// `Key` plus a `requires:` suffix when sub-dependencies exist.
fn heading(dependency: &Dependency) -> String {
    let key = dependency.reference.display_key();
    if dependency.sub_dependencies.is_empty() {
        return key;
    }

    let requires = dependency
        .sub_dependencies
        .iter()
        .map(|d| d.reference.display_key())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{key} (requires: {requires})")
}

/// Collect every provided dependency with no linked injection site,
/// in module order.
pub fn collect_unused(modules: &[Module]) -> Vec<UnusedDependency> {
    let mut unused = Vec::new();
    for module in modules {
        for dependency in &module.dependencies {
            if dependency.injection_sites.is_empty() {
                unused.push(UnusedDependency {
                    module: module.name.clone(),
                    dependency: dependency.reference.display_key(),
                });
            }
        }
    }
    unused
}

/// Render the unused-dependency report, one aligned line per finding.
pub fn render_unused(unused: &[UnusedDependency]) -> String {
    if unused.is_empty() {
        return "No unused dependencies.\n".to_string();
    }

    let mut out = String::new();
    for entry in unused {
        let _ = writeln!(out, "UNUSED  {}  {}", entry.module, entry.dependency);
    }
    let count = unused.len();
    let _ = write!(out, "\n{count} unused");
    out.push('\n');
    out
}

/// Pretty-print any report payload as JSON.
pub fn render_json<T: Serialize>(payload: &T) -> String {
    // The model contains only strings, paths, and sequences.
    serde_json::to_string_pretty(payload).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::types::{Component, SymbolRef};

    fn linked_module() -> Module {
        let mut context = Dependency::new(SymbolRef::unqualified("Context"));
        context.add_injection_site(PathBuf::from("/app/ui/MainActivity.java"));

        let mut widget = Dependency::new(SymbolRef::qualified("String", "base url"));
        widget.sub_dependencies.push(Dependency::new(SymbolRef::unqualified("Context")));

        Module {
            name: "AppModule".to_string(),
            dependencies: vec![context, widget],
        }
    }

    #[test]
    fn graph_rendering_shows_components_modules_and_sites() {
        let analysis = Analysis {
            modules: vec![linked_module()],
            components: vec![Component {
                name: "AppComponent".to_string(),
                modules: vec![linked_module()],
                injected_targets: vec!["MainActivity".to_string()],
            }],
        };

        let text = render_graph(&analysis);
        assert!(text.contains("## AppComponent"));
        assert!(text.contains("Injects: MainActivity"));
        assert!(text.contains("### AppModule"));
        assert!(text.contains("- Context"));
        assert!(text.contains("site: /app/ui/MainActivity.java"));
        assert!(text.contains("String (\"base url\") (requires: Context)"));
    }

    #[test]
    fn unused_collects_only_dependencies_without_sites() {
        let modules = vec![linked_module()];
        let unused = collect_unused(&modules);

        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].module, "AppModule");
        assert_eq!(unused[0].dependency, "String (\"base url\")");
    }

    #[test]
    fn unused_rendering_counts_findings() {
        let unused = collect_unused(&[linked_module()]);
        let text = render_unused(&unused);

        assert!(text.contains("UNUSED  AppModule  String (\"base url\")"));
        assert!(text.contains("1 unused"));
        assert_eq!(render_unused(&[]), "No unused dependencies.\n");
    }

    #[test]
    fn json_rendering_keeps_the_model_shape() {
        let modules = vec![linked_module()];
        let json = render_json(&modules);

        assert!(json.contains("\"name\": \"AppModule\""));
        assert!(json.contains("\"qualifier\": \"base url\""));
        assert!(json.contains("MainActivity.java"));
    }
}
