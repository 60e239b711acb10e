use std::path::{Path, PathBuf};

use serde::Serialize;

/// Output the comprehensive daggermap reference document.
pub fn run(json: bool) {
    let root = PathBuf::from(".");
    let state = gather_state(&root);

    if json {
        print_json(&state);
    } else {
        print_markdown(&state);
    }
}

// ── State gathering ───────────────────────────────────────────────────

struct CurrentState {
    config_found: bool,
}

fn gather_state(root: &Path) -> CurrentState {
    CurrentState {
        config_found: root.join(".daggermap.toml").exists(),
    }
}

// ── Markdown output ───────────────────────────────────────────────────

fn print_markdown(state: &CurrentState) {
    let version = env!("CARGO_PKG_VERSION");
    print!(
        "\
# daggermap {version}

Audit Dagger injection graphs in Java and Kotlin sources without
compiling: reconstruct modules, components, and bindings from
annotations alone.

## Recognized Annotations

    @Module                          marks a provider file
    @Provides [@Named(\"...\")]        one provided dependency
    @Inject / @field:[Inject]        a field injection site
    @Component / @Subcomponent       marks a consumer file
    SomeModule.class / ::class       module listing in a component
    inject(Target)                   method-level injection target

## Workflow

    daggermap graph [PATH]           Print the component wiring graph
    daggermap modules [PATH]         List modules with injection sites
    daggermap unused [PATH]          Report never-injected dependencies
    daggermap watch [PATH]           Re-run graph on source changes

Pass --json to any reporting command for machine-readable output.

## Configuration (.daggermap.toml)

    include = [\"app/\"]               # only scan these path prefixes
    exclude = [\"app/test/\"]          # skip these path prefixes
    exclude_dirs = [\"build\"]         # directory names pruned entirely
    extensions = [\"java\", \"kt\"]      # source file extensions

## Current State

"
    );

    if state.config_found {
        println!("Config: .daggermap.toml (found)");
    } else {
        println!("Config: .daggermap.toml (not found)");
    }

    println!();
    print_markdown_exit_codes();
}

fn print_markdown_exit_codes() {
    print!(
        "\
## Exit Codes

| Code | Meaning |
|------|---------|
| 0    | Success / nothing unused |
| 1    | Unused dependencies found |
| 2    | Runtime error |
"
    );
}

// ── JSON output ───────────────────────────────────────────────────────

#[derive(Serialize)]
struct InfoJson {
    version: String,
    exit_codes: Vec<ExitCodeInfo>,
    current_state: StateJson,
}

#[derive(Serialize)]
struct ExitCodeInfo {
    code: u8,
    meaning: String,
}

#[derive(Serialize)]
struct StateJson {
    config_found: bool,
}

fn print_json(state: &CurrentState) {
    let info = InfoJson {
        version: env!("CARGO_PKG_VERSION").to_string(),
        exit_codes: vec![
            ExitCodeInfo { code: 0, meaning: "Success / nothing unused".to_string() },
            ExitCodeInfo { code: 1, meaning: "Unused dependencies found".to_string() },
            ExitCodeInfo { code: 2, meaning: "Runtime error".to_string() },
        ],
        current_state: StateJson { config_found: state.config_found },
    };

    // serde_json::to_string_pretty won't fail on this structure.
    let json = serde_json::to_string_pretty(&info).unwrap_or_default();
    println!("{json}");
}
