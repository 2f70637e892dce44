//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order and symbols are sorted, so output is
/// deterministic regardless of how often an import was requested.
///
/// # Example
///
/// ```
/// use syslib_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("./IWorldKernel.sol", "IWorldCall");
/// imports.add("./ResourceId.sol", "ResourceId");
/// imports.add("./IWorldKernel.sol", "IWorldCall");
///
/// for (module, symbols) in imports.iter() {
///     let symbols: Vec<&str> = symbols.iter().map(|s| s.as_str()).collect();
///     println!("import {{ {} }} from \"{}\";", symbols.join(", "), module);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Remove a symbol from every module, dropping modules left empty.
    pub fn remove_symbol(&mut self, symbol: &str) {
        for symbols in self.imports.values_mut() {
            symbols.remove(symbol);
        }
        self.imports.retain(|_, symbols| !symbols.is_empty());
    }

    /// Modules that provide the given symbol, in insertion order.
    pub fn modules_for(&self, symbol: &str) -> Vec<&str> {
        self.imports
            .iter()
            .filter(|(_, symbols)| symbols.contains(symbol))
            .map(|(module, _)| module.as_str())
            .collect()
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collected(imports: &ImportCollector) -> Vec<(&str, Vec<&str>)> {
        imports
            .iter()
            .map(|(m, s)| (m, s.iter().map(String::as_str).collect()))
            .collect()
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut imports = ImportCollector::new();
        imports.add("./Systems.sol", "Systems");
        imports.add("./IWorldKernel.sol", "IWorldCall");
        imports.add("./IWorldKernel.sol", "IWorldErrors");
        imports.add("./Systems.sol", "Systems");

        assert_eq!(
            collected(&imports),
            vec![
                ("./Systems.sol", vec!["Systems"]),
                ("./IWorldKernel.sol", vec!["IWorldCall", "IWorldErrors"]),
            ]
        );
    }

    #[test]
    fn test_insertion_order_and_sorted_symbols() {
        let mut imports = ImportCollector::new();
        imports.add("b.sol", "Zeta");
        imports.add("a.sol", "Alpha");
        imports.add("b.sol", "Beta");

        assert_eq!(
            collected(&imports),
            vec![("b.sol", vec!["Beta", "Zeta"]), ("a.sol", vec!["Alpha"])]
        );
    }

    #[test]
    fn test_remove_symbol_drops_empty_modules() {
        let mut imports = ImportCollector::new();
        imports.add("types.sol", "CallWrapper");
        imports.add("types.sol", "Position");
        imports.add("wrapper.sol", "CallWrapper");

        imports.remove_symbol("CallWrapper");

        assert_eq!(collected(&imports), vec![("types.sol", vec!["Position"])]);
    }

    #[test]
    fn test_modules_for() {
        let mut imports = ImportCollector::new();
        imports.add("a.sol", "Shared");
        imports.add("b.sol", "Other");
        imports.add("c.sol", "Shared");

        assert_eq!(imports.modules_for("Shared"), vec!["a.sol", "c.sol"]);
        assert!(imports.modules_for("Missing").is_empty());
    }
}
