//! Graph linking: attach the corpus-wide injection observations to the
//! provided dependencies they satisfy.

use crate::injections::InjectionIndex;
use crate::types::Module;

/// Cross-reference every provided dependency against the injection
/// index by its (name, qualifier) key and append every observed file
/// path, skipping paths already present.
///
/// This is a pure enrichment pass: it creates no new entities, removes
/// none, and is idempotent. A dependency whose key was never observed
/// keeps an empty `injection_sites`.
pub fn link(index: &InjectionIndex, modules: &mut [Module]) {
    for module in modules.iter_mut() {
        for dependency in &mut module.dependencies {
            for path in index.sites(&dependency.reference) {
                dependency.add_injection_site(path.clone());
            }
        }
    }
}
