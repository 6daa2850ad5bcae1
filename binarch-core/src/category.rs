//! Static classification of encodable types

use core::fmt;

/// The wire category of an encodable type
///
/// Every [`Encode`](crate::Encode) impl names exactly one category through
/// [`Encode::CATEGORY`](crate::Encode::CATEGORY). The variants are listed in
/// classification precedence; a type that does not pick one is
/// [`Category::Custom`] and supplies its own encode/decode logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Integers, floats, `bool` and `char`: raw native-endian bit pattern
    Arithmetic,
    /// Fieldless enums, written through their underlying repr
    Enumeration,
    /// UTF-8 strings: length field followed by the bytes
    Text,
    /// `[T; N]`: no length field, arity is static
    FixedArray,
    /// `Vec`, `VecDeque`, `LinkedList`, slices and byte buffers
    Sequence,
    /// Ordered and hashed maps
    Map,
    /// Ordered and hashed sets
    Set,
    /// Time spans, written as a nanosecond tick count
    Duration,
    /// Absolute time, written as the duration since the UNIX epoch
    TimePoint,
    /// `Option<T>`: presence flag plus payload
    Optional,
    /// Sum types: discriminant plus the active alternative
    Variant,
    /// Tuples: members in declaration order, no arity field
    Tuple,
    /// User-defined types with a hand-written encode/decode hook
    Custom,
}

impl Category {
    /// All categories in classification precedence
    pub const ALL: [Category; 13] = [
        Category::Arithmetic,
        Category::Enumeration,
        Category::Text,
        Category::FixedArray,
        Category::Sequence,
        Category::Map,
        Category::Set,
        Category::Duration,
        Category::TimePoint,
        Category::Optional,
        Category::Variant,
        Category::Tuple,
        Category::Custom,
    ];

    /// Stable lower-case label
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Arithmetic => "arithmetic",
            Category::Enumeration => "enumeration",
            Category::Text => "text",
            Category::FixedArray => "fixed-array",
            Category::Sequence => "sequence",
            Category::Map => "map",
            Category::Set => "set",
            Category::Duration => "duration",
            Category::TimePoint => "time-point",
            Category::Optional => "optional",
            Category::Variant => "variant",
            Category::Tuple => "tuple",
            Category::Custom => "custom",
        }
    }

    /// Whether values of this category start with a length field
    pub const fn is_length_prefixed(&self) -> bool {
        matches!(
            self,
            Category::Text | Category::Sequence | Category::Map | Category::Set
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The category of `T`, usable where naming the trait const is awkward
pub const fn category_of<T: crate::Encode + ?Sized>() -> Category {
    T::CATEGORY
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::time::Duration;

    #[test]
    fn test_builtin_classification() {
        assert_eq!(category_of::<u32>(), Category::Arithmetic);
        assert_eq!(category_of::<f64>(), Category::Arithmetic);
        assert_eq!(category_of::<bool>(), Category::Arithmetic);
        assert_eq!(category_of::<char>(), Category::Arithmetic);
        assert_eq!(category_of::<String>(), Category::Text);
        assert_eq!(category_of::<str>(), Category::Text);
        assert_eq!(category_of::<[u8; 4]>(), Category::FixedArray);
        assert_eq!(category_of::<Vec<String>>(), Category::Sequence);
        assert_eq!(category_of::<VecDeque<u8>>(), Category::Sequence);
        assert_eq!(category_of::<LinkedList<u8>>(), Category::Sequence);
        assert_eq!(category_of::<BTreeMap<u8, u8>>(), Category::Map);
        assert_eq!(category_of::<BTreeSet<u8>>(), Category::Set);
        assert_eq!(category_of::<Duration>(), Category::Duration);
        assert_eq!(category_of::<Option<u8>>(), Category::Optional);
        assert_eq!(category_of::<Result<u8, String>>(), Category::Variant);
        assert_eq!(category_of::<(u8, String)>(), Category::Tuple);
    }

    #[test]
    fn test_pointers_inherit_category() {
        assert_eq!(category_of::<&str>(), Category::Text);
        assert_eq!(category_of::<alloc::boxed::Box<u64>>(), Category::Arithmetic);
    }

    #[test]
    fn test_length_prefixed() {
        let prefixed: Vec<_> = Category::ALL
            .iter()
            .filter(|c| c.is_length_prefixed())
            .collect();
        assert_eq!(
            prefixed,
            [&Category::Text, &Category::Sequence, &Category::Map, &Category::Set]
        );
    }

    #[test]
    fn test_names_are_unique() {
        let names: BTreeSet<_> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Category::ALL.len());
    }
}
