//! Exclude/include decision for scanned class and source paths.

use crate::trie::{compile_pattern, TrieCompiler};
use javaimport_core::filter::package_prefix;
use javaimport_core::{FilterConfig, Result};
use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, info};

/// Compiler-generated anonymous/local classes, e.g. `Outer$1.class`.
const SYNTHETIC_CLASS_CLAUSE: &str = r".*\$[0-9]+\.class$";

/// Package filter applied to every candidate path before parsing.
///
/// Paths use `/` separators relative to their classpath root
/// (`java/lang/String.class`). A path is rejected when it starts with an
/// excluded package prefix (or names a synthetic inner class) and does not
/// start with an included one. Includes never reject anything on their own.
///
/// The filter holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct PathFilter {
    exclude: Regex,
    include: Regex,
}

impl PathFilter {
    /// Build a filter from dotted package names.
    ///
    /// Packages that normalize to an empty prefix are dropped.
    pub fn new<E, I>(excludes: E, includes: I) -> Result<Self>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let excludes = prefix_compiler(excludes);
        let includes = prefix_compiler(includes);
        let (exclude_count, include_count) = (excludes.len(), includes.len());

        let exclude = compile_pattern(&format!(
            "^(?:{}|{})",
            excludes.pattern_text(),
            SYNTHETIC_CLASS_CLAUSE
        ))?;
        let include = compile_pattern(&format!("^(?:{})", includes.pattern_text()))?;

        info!(
            excludes = exclude_count,
            includes = include_count,
            "Path filter ready"
        );
        debug!(
            exclude = exclude.as_str(),
            include = include.as_str(),
            "Compiled filter patterns"
        );

        Ok(Self { exclude, include })
    }

    /// Build a filter from the `[filter]` section of the configuration.
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        Self::new(&config.excludes, &config.includes)
    }

    /// Return `true` if `path` should be parsed, `false` to skip it.
    pub fn apply(&self, path: &str) -> bool {
        !self.exclude.is_match(path) || self.include.is_match(path)
    }

    /// Keep only the paths that pass the filter, preserving order.
    pub fn retain_kept(&self, paths: Vec<String>) -> Vec<String> {
        paths.into_par_iter().filter(|p| self.apply(p)).collect()
    }

    /// Split paths into `(kept, rejected)`, preserving order within each.
    pub fn partition(&self, paths: Vec<String>) -> (Vec<String>, Vec<String>) {
        paths.into_par_iter().partition(|p| self.apply(p))
    }

    /// Full text of the exclude regex.
    pub fn exclude_pattern(&self) -> &str {
        self.exclude.as_str()
    }

    /// Full text of the include regex.
    pub fn include_pattern(&self) -> &str {
        self.include.as_str()
    }
}

fn prefix_compiler<P>(packages: P) -> TrieCompiler
where
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    let mut compiler = TrieCompiler::new();
    for package in packages {
        match package_prefix(package.as_ref()) {
            Some(prefix) => compiler.add(&prefix),
            None => debug!("Dropping empty package entry"),
        }
    }
    compiler
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::NEVER_MATCH;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_exclude_only() {
        let filter = PathFilter::new(["java.lang"], NONE).unwrap();

        assert!(!filter.apply("java/lang/String.class"));
        assert!(!filter.apply("java/lang/reflect/Method.class"));
        assert!(filter.apply("java/util/List.class"));
    }

    #[test]
    fn test_include_rescues_excluded_path() {
        let filter = PathFilter::new(["com.acme"], ["com.acme.api"]).unwrap();

        assert!(filter.apply("com/acme/api/Widget.class"));
        assert!(!filter.apply("com/acme/internal/Helper.class"));
        assert!(filter.apply("org/other/Thing.class"));
    }

    #[test]
    fn test_include_alone_rejects_nothing() {
        let filter = PathFilter::new(NONE, ["com.acme"]).unwrap();

        assert!(filter.apply("com/acme/Widget.class"));
        assert!(filter.apply("org/other/Thing.class"));
    }

    #[test]
    fn test_package_boundary() {
        let filter = PathFilter::new(["java.lang"], NONE).unwrap();

        assert!(filter.apply("java/langx/Foo.class"));
        assert!(filter.apply("java/lang"));
        assert!(!filter.apply("java/lang/"));
    }

    #[test]
    fn test_prefix_only_at_start() {
        let filter = PathFilter::new(["java.lang"], NONE).unwrap();

        assert!(filter.apply("src/java/lang/String.java"));
    }

    #[test]
    fn test_synthetic_inner_classes_always_excluded() {
        let filter = PathFilter::new(NONE, NONE).unwrap();

        assert!(!filter.apply("com/acme/Outer$1.class"));
        assert!(!filter.apply("com/acme/Outer$Inner$12.class"));
        assert!(filter.apply("com/acme/Outer$Inner.class"));
        assert!(filter.apply("com/acme/Outer$1.java"));
        assert!(filter.apply("com/acme/Outer$.class"));
    }

    #[test]
    fn test_include_rescues_synthetic_inner_classes() {
        let filter = PathFilter::new(["com.acme"], ["com.acme.api"]).unwrap();

        assert!(filter.apply("com/acme/api/Widget$1.class"));
        assert!(!filter.apply("com/acme/internal/Widget$1.class"));
    }

    #[test]
    fn test_empty_path_is_kept() {
        let filter = PathFilter::new(["java.lang"], ["java.lang.reflect"]).unwrap();
        assert!(filter.apply(""));
    }

    #[test]
    fn test_empty_packages_are_dropped() {
        let filter = PathFilter::new(["", "java.lang"], [""]).unwrap();

        assert!(filter.apply("org/Foo.class"));
        assert!(!filter.apply("java/lang/Object.class"));
        assert_eq!(filter.include_pattern(), format!("^(?:{NEVER_MATCH})"));
    }

    #[test]
    fn test_pattern_text() {
        let filter = PathFilter::new(["sun", "sunw", "org"], ["org.acme"]).unwrap();

        assert_eq!(
            filter.exclude_pattern(),
            r"^(?:(?:org/|sun(?:w/|/))|.*\$[0-9]+\.class$)"
        );
        assert_eq!(filter.include_pattern(), "^(?:org/acme/)");
    }

    #[test]
    fn test_empty_sets_use_sentinel() {
        let filter = PathFilter::new(NONE, NONE).unwrap();

        assert_eq!(
            filter.exclude_pattern(),
            format!(r"^(?:{NEVER_MATCH}|.*\$[0-9]+\.class$)")
        );
        assert!(filter.apply("java/lang/String.class"));
    }

    #[test]
    fn test_from_config() {
        let config = FilterConfig {
            excludes: vec!["com.acme".to_string()],
            includes: vec!["com.acme.api".to_string()],
        };
        let filter = PathFilter::from_config(&config).unwrap();

        assert!(filter.apply("com/acme/api/Widget.class"));
        assert!(!filter.apply("com/acme/Helper.class"));
    }

    #[test]
    fn test_retain_and_partition_preserve_order() {
        let filter = PathFilter::new(["com.acme"], ["com.acme.api"]).unwrap();
        let paths: Vec<String> = [
            "com/acme/Helper.class",
            "com/acme/api/A.class",
            "org/B.class",
            "com/acme/Outer$1.class",
            "com/acme/api/C.class",
        ]
        .iter()
        .map(|p| p.to_string())
        .collect();

        assert_eq!(
            filter.retain_kept(paths.clone()),
            vec!["com/acme/api/A.class", "org/B.class", "com/acme/api/C.class"]
        );

        let (kept, rejected) = filter.partition(paths);
        assert_eq!(kept.len(), 3);
        assert_eq!(
            rejected,
            vec!["com/acme/Helper.class", "com/acme/Outer$1.class"]
        );
    }
}
