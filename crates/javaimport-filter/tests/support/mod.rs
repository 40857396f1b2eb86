//! Shared helpers for javaimport-filter integration tests.
//!
//! Inputs come from a fixed-seed generator so failures reproduce exactly.

#![allow(dead_code)]

/// Small linear congruential generator; good enough for test inputs.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) as u32
    }

    pub fn below(&mut self, n: usize) -> usize {
        self.next_u32() as usize % n
    }

    /// A string of `1..=max_len` characters drawn from `alphabet`.
    pub fn word(&mut self, alphabet: &[char], max_len: usize) -> String {
        let len = 1 + self.below(max_len);
        (0..len)
            .map(|_| alphabet[self.below(alphabet.len())])
            .collect()
    }
}

/// Narrow alphabet so generated prefixes share branches often, with regex
/// metacharacters and a multi-byte character mixed in.
pub const ALPHABET: &[char] = &['a', 'b', 'c', '.', '$', '/', '[', '\\', 'é'];

/// Reference answer: does `s` start with any of `prefixes`?
pub fn naive_has_prefix(prefixes: &[String], s: &str) -> bool {
    prefixes.iter().any(|p| s.starts_with(p.as_str()))
}

/// Reference two-tier decision over slash-terminated prefixes.
pub fn naive_apply(excludes: &[String], includes: &[String], path: &str) -> bool {
    !naive_has_prefix(excludes, path) || naive_has_prefix(includes, path)
}

/// Realistic class paths as they appear inside a JDK-style archive.
pub fn class_paths() -> Vec<String> {
    [
        "java/lang/String.class",
        "java/lang/Object.class",
        "java/lang/reflect/Method.class",
        "java/lang/invoke/MethodHandle.class",
        "java/langx/Strange.class",
        "java/util/List.class",
        "java/util/concurrent/ConcurrentHashMap.class",
        "java/util/concurrent/ConcurrentHashMap$Node.class",
        "java/util/concurrent/ConcurrentHashMap$1.class",
        "javax/swing/JButton.class",
        "sun/misc/Unsafe.class",
        "sunw/io/Serializable.class",
        "com/acme/api/Widget.class",
        "com/acme/api/Widget$Builder.class",
        "com/acme/internal/Helper.class",
        "com/acme/internal/Helper$2.class",
        "org/example/Main.class",
        "",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}
