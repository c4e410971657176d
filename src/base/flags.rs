use std::fmt;

/// Declaration flag bits recorded by the front end.
///
/// The front end sets these when it builds the graph; the documentation
/// model only ever reads them. Stored as a plain bit set so a graph of
/// millions of symbols stays compact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SymbolFlags(u32);

impl SymbolFlags {
    /// No flags set.
    pub const EMPTY: SymbolFlags = SymbolFlags(0);
    /// Declared private.
    pub const PRIVATE: SymbolFlags = SymbolFlags(1 << 0);
    /// Synthesized by the compiler (no source declaration).
    pub const SYNTHETIC: SymbolFlags = SymbolFlags(1 << 1);
    /// Generated during desugaring from a source declaration.
    pub const GENERATED: SymbolFlags = SymbolFlags(1 << 2);
    /// Stable (immutable-field accessor methods carry this).
    pub const STABLE: SymbolFlags = SymbolFlags(1 << 3);
    /// Originates from the host-interop boundary, not this language.
    pub const FOREIGN: SymbolFlags = SymbolFlags(1 << 4);
    /// A constructor method.
    pub const CONSTRUCTOR: SymbolFlags = SymbolFlags(1 << 5);
    /// A generated case-class factory method.
    pub const CASE_FACTORY: SymbolFlags = SymbolFlags(1 << 6);
    /// The class-side view of a package.
    pub const PACKAGE_CLASS: SymbolFlags = SymbolFlags(1 << 7);

    /// Test whether every bit of `other` is set.
    pub fn has(self, other: SymbolFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets.
    #[must_use]
    pub fn with(self, other: SymbolFlags) -> SymbolFlags {
        SymbolFlags(self.0 | other.0)
    }

    /// True if no flag is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for SymbolFlags {
    type Output = SymbolFlags;

    fn bitor(self, rhs: SymbolFlags) -> SymbolFlags {
        self.with(rhs)
    }
}

impl fmt::Debug for SymbolFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(SymbolFlags, &str); 8] = [
            (SymbolFlags::PRIVATE, "PRIVATE"),
            (SymbolFlags::SYNTHETIC, "SYNTHETIC"),
            (SymbolFlags::GENERATED, "GENERATED"),
            (SymbolFlags::STABLE, "STABLE"),
            (SymbolFlags::FOREIGN, "FOREIGN"),
            (SymbolFlags::CONSTRUCTOR, "CONSTRUCTOR"),
            (SymbolFlags::CASE_FACTORY, "CASE_FACTORY"),
            (SymbolFlags::PACKAGE_CLASS, "PACKAGE_CLASS"),
        ];
        let mut first = true;
        write!(f, "SymbolFlags(")?;
        for (flag, name) in NAMES {
            if self.has(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_union_and_test() {
        let flags = SymbolFlags::PRIVATE | SymbolFlags::STABLE;
        assert!(flags.has(SymbolFlags::PRIVATE));
        assert!(flags.has(SymbolFlags::STABLE));
        assert!(!flags.has(SymbolFlags::SYNTHETIC));
        assert!(!flags.has(SymbolFlags::PRIVATE | SymbolFlags::SYNTHETIC));
    }

    #[test]
    fn test_empty_flags() {
        assert!(SymbolFlags::EMPTY.is_empty());
        assert!(!SymbolFlags::FOREIGN.is_empty());
        assert!(SymbolFlags::EMPTY.has(SymbolFlags::EMPTY));
    }
}
