//! Package list helpers (flag parsing, prefix normalization).

/// Split a comma-separated package list as given on the command line.
///
/// Each item is trimmed of surrounding spaces and dots, so `" java.lang. "`
/// becomes `java.lang`. Items that end up empty are kept; they are dropped
/// later by [`package_prefix`].
pub fn parse_package_list(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(|pkg| pkg.trim_matches(|c| c == ' ' || c == '.').to_string())
        .collect()
}

/// Turn a dotted package name into a slash-terminated path prefix.
///
/// `java.lang` becomes `java/lang/`. The trailing separator keeps
/// `java/langx/` from falling under `java.lang`. Returns `None` when the
/// package normalizes to a bare `/`, which would match every path.
pub fn package_prefix(package: &str) -> Option<String> {
    let mut prefix = package.replace('.', "/");
    prefix.push('/');

    if prefix == "/" {
        None
    } else {
        Some(prefix)
    }
}
