//! Interface identifiers and their natural ordering.
//!
//! Switch ports are named by an optional alphabetic module prefix followed by
//! a port number (`A1`, `24`, `Trk3`). [`InterfaceId`] keeps the name exactly
//! as written and orders by [`InterfaceKey`], so `A2` sorts before `A10` and
//! all of module `A` sorts before module `B`.

use std::{cmp::Ordering, fmt};

/// The name of a switch interface, exactly as it appeared in the configuration.
///
/// # Examples
///
/// ```
/// use vlandoc_core::identifier::InterfaceId;
///
/// let mut ports = vec![
///     InterfaceId::new("A10"),
///     InterfaceId::new("B1"),
///     InterfaceId::new("A2"),
/// ];
/// ports.sort();
/// assert_eq!(ports, ["A2", "A10", "B1"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceId(String);

impl InterfaceId {
    /// Creates an `InterfaceId` from a port name.
    ///
    /// # Arguments
    ///
    /// * `name` - The name as written in the configuration, e.g. `A1` or `Trk2`
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates an `InterfaceId` from a module prefix and a port number.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlandoc_core::identifier::InterfaceId;
    ///
    /// assert_eq!(InterfaceId::from_parts("A", 7), "A7");
    /// assert_eq!(InterfaceId::from_parts("", 24), "24");
    /// ```
    pub fn from_parts(module: &str, number: u32) -> Self {
        Self(format!("{module}{number}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the sort key of this interface.
    pub fn key(&self) -> InterfaceKey<'_> {
        InterfaceKey::parse(&self.0)
    }
}

/// Sort key splitting an interface name into module, number and remainder.
///
/// Names that do not match `<letters><digits>` still get a key: the number is
/// zero when digits are absent and whatever follows the digits lands in
/// `rest`. Port numbers too large for `u64` saturate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct InterfaceKey<'a> {
    module: &'a str,
    number: u64,
    rest: &'a str,
}

impl<'a> InterfaceKey<'a> {
    /// Splits `name` into its sort key components.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlandoc_core::identifier::InterfaceKey;
    ///
    /// let key = InterfaceKey::parse("A12");
    /// assert_eq!(key.module(), "A");
    /// assert_eq!(key.number(), 12);
    /// ```
    pub fn parse(name: &'a str) -> Self {
        let digits_start = name
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(name.len());
        let (module, tail) = name.split_at(digits_start);
        let digits_end = tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len());
        let (digits, rest) = tail.split_at(digits_end);

        let number = digits.bytes().fold(0u64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        });

        Self {
            module,
            number,
            rest,
        }
    }

    pub fn module(&self) -> &'a str {
        self.module
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn rest(&self) -> &'a str {
        self.rest
    }
}

impl Ord for InterfaceId {
    fn cmp(&self, other: &Self) -> Ordering {
        // Distinct names can share a key ("A01" and "A1"), fall back to the text.
        self.key()
            .cmp(&other.key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for InterfaceId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for InterfaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InterfaceId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for InterfaceId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for InterfaceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for InterfaceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut ids: Vec<InterfaceId> = names.iter().copied().map(InterfaceId::new).collect();
        ids.sort();
        ids.into_iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_key_splits_module_and_number() {
        let key = InterfaceKey::parse("B24");
        assert_eq!(key.module(), "B");
        assert_eq!(key.number(), 24);
        assert_eq!(key.rest(), "");
    }

    #[test]
    fn test_key_without_module() {
        let key = InterfaceKey::parse("7");
        assert_eq!(key.module(), "");
        assert_eq!(key.number(), 7);
    }

    #[test]
    fn test_key_without_digits() {
        let key = InterfaceKey::parse("mgmt");
        assert_eq!(key.module(), "mgmt");
        assert_eq!(key.number(), 0);
        assert_eq!(key.rest(), "");
    }

    #[test]
    fn test_key_keeps_trailing_text() {
        let key = InterfaceKey::parse("A1x");
        assert_eq!(key.module(), "A");
        assert_eq!(key.number(), 1);
        assert_eq!(key.rest(), "x");
    }

    #[test]
    fn test_key_saturates_huge_numbers() {
        let key = InterfaceKey::parse("A99999999999999999999999");
        assert_eq!(key.number(), u64::MAX);
    }

    #[test]
    fn test_natural_ordering() {
        assert_eq!(
            sorted(&["A10", "B1", "A2", "A1"]),
            ["A1", "A2", "A10", "B1"]
        );
    }

    #[test]
    fn test_numeric_ports_sort_before_modules() {
        assert_eq!(sorted(&["A1", "10", "2"]), ["2", "10", "A1"]);
    }

    #[test]
    fn test_equal_keys_are_ordered_by_text() {
        let padded = InterfaceId::new("A01");
        let plain = InterfaceId::new("A1");
        assert_eq!(padded.key(), plain.key());
        assert_ne!(padded, plain);
        assert_ne!(padded.cmp(&plain), Ordering::Equal);
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(InterfaceId::from_parts("Trk", 3), "Trk3");
    }

    proptest! {
        #[test]
        fn test_ordering_agrees_with_equality(a in "[A-C]{0,1}[0-9]{1,3}", b in "[A-C]{0,1}[0-9]{1,3}") {
            let left = InterfaceId::new(a.as_str());
            let right = InterfaceId::new(b.as_str());
            prop_assert_eq!(left.cmp(&right) == Ordering::Equal, left == right);
        }

        #[test]
        fn test_same_module_orders_by_number(module in "[A-Z]{0,2}", x in 0u32..10_000, y in 0u32..10_000) {
            let left = InterfaceId::from_parts(&module, x);
            let right = InterfaceId::from_parts(&module, y);
            prop_assert_eq!(left.cmp(&right), x.cmp(&y));
        }
    }
}
