pub mod expander;

/// Vendor prefixes, in the order synthesized declarations are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Webkit,
    Moz,
    O,
    Ms,
}

impl Prefix {
    pub const ALL: [Prefix; 4] = [Prefix::Webkit, Prefix::Moz, Prefix::O, Prefix::Ms];

    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Webkit => "-webkit",
            Prefix::Moz => "-moz",
            Prefix::O => "-o",
            Prefix::Ms => "-ms",
        }
    }

    pub fn from_marker(marker: &str) -> Option<Prefix> {
        Prefix::ALL.into_iter().find(|prefix| prefix.as_str() == marker)
    }

    /// Position in [`Prefix::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// `transform` becomes `-webkit-transform`.
    pub fn apply(self, canonical: &str) -> String {
        format!("{}-{}", self.as_str(), canonical)
    }
}

/// Canonical property names eligible for prefix expansion.
pub const PREFIXABLE_PROPERTIES: [&str; 18] = [
    "animation-direction",
    "animation-duration",
    "animation-name",
    "animation-timing-function",
    "animation-fill-mode",
    "animation-play-state",
    "appearance",
    "background-clip",
    "box-orient",
    "box-sizing",
    "font-kerning",
    "line-clamp",
    "transform-origin",
    "tap-highlight-color",
    "transform-style",
    "transform",
    "transition",
    "user-select",
];

pub fn can_be_prefixed(name: &str) -> bool {
    PREFIXABLE_PROPERTIES.contains(&name)
}

/// Outcome of reading a property name as `<prefix>-<canonical>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixedName<'a> {
    /// The first two `-` segments form a known prefix and something follows.
    Prefixed { prefix: Prefix, canonical: &'a str },
    /// A known prefix with nothing after it, e.g. `-webkit` or `-webkit-`.
    Dangling(Prefix),
    Unprefixed,
}

/// Splits off the first two `-`-delimited segments of `name`.
///
/// `-webkit-transform-origin` splits into `-webkit` and `transform-origin`.
/// The remainder is not checked against [`PREFIXABLE_PROPERTIES`].
pub fn split_prefix(name: &str) -> PrefixedName<'_> {
    let Some(rest) = name.strip_prefix('-') else {
        return PrefixedName::Unprefixed;
    };
    let (marker, canonical) = match rest.find('-') {
        Some(at) => (&name[..at + 1], &rest[at + 1..]),
        None => (name, ""),
    };
    match Prefix::from_marker(marker) {
        Some(prefix) if canonical.is_empty() => PrefixedName::Dangling(prefix),
        Some(prefix) => PrefixedName::Prefixed { prefix, canonical },
        None => PrefixedName::Unprefixed,
    }
}
