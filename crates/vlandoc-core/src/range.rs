//! Member-spec expansion.
//!
//! VLAN and trunk declarations list their member ports as a comma-separated
//! spec such as `A1-A4,B2,7-9`. Each token is either a single interface name
//! or a range `<module><start>-<module><end>` where both bounds carry the same
//! module prefix. This module expands those tokens and collects the result in
//! an [`InterfaceSet`].

use std::collections::{BTreeSet, btree_set};

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::identifier::InterfaceId;

/// Largest number of interfaces a single range token may expand to.
pub const MAX_RANGE_LEN: u64 = 65_536;

/// Errors produced while expanding a member-spec token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Range bounds carry different module prefixes, e.g. `A1-B4`.
    #[error("range `{token}` mixes module prefixes `{start}` and `{end}`")]
    PrefixMismatch {
        token: String,
        start: String,
        end: String,
    },

    /// A range bound is not `<letters><digits>`.
    #[error("`{bound}` in range `{token}` is not a port number")]
    InvalidBound { token: String, bound: String },

    /// The range would expand to more than [`MAX_RANGE_LEN`] interfaces.
    #[error("range `{token}` spans {len} ports, more than the limit of {max}", max = MAX_RANGE_LEN)]
    TooLarge { token: String, len: u64 },
}

/// How a parser treats member-spec tokens that fail to expand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Malformed tokens are errors and parsing fails.
    #[default]
    Strict,
    /// Malformed tokens are skipped with a warning.
    Lenient,
}

/// Splits a member spec on commas, yielding each non-empty token together
/// with its byte offset inside `spec`.
///
/// # Examples
///
/// ```
/// use vlandoc_core::range::spec_tokens;
///
/// let tokens: Vec<_> = spec_tokens("A1-A3,,B2").collect();
/// assert_eq!(tokens, [(0, "A1-A3"), (7, "B2")]);
/// ```
pub fn spec_tokens(spec: &str) -> impl Iterator<Item = (usize, &str)> {
    spec.split(',')
        .scan(0, |offset, token| {
            let start = *offset;
            *offset += token.len() + 1;
            Some((start, token))
        })
        .filter(|(_, token)| !token.is_empty())
}

/// Expands a single spec token into the interfaces it names.
///
/// A token without `-` names exactly one interface. A range expands to every
/// port number from start to end inclusive, prefixed with the shared module.
/// A reversed range (`A5-A3`) expands to nothing and logs a warning.
///
/// # Errors
///
/// Returns a [`RangeError`] when the bounds are malformed, carry different
/// module prefixes, or span more than [`MAX_RANGE_LEN`] ports.
///
/// # Examples
///
/// ```
/// use vlandoc_core::range::expand_token;
///
/// let ports = expand_token("A1-A3").unwrap();
/// assert_eq!(ports, ["A1", "A2", "A3"]);
/// assert_eq!(expand_token("B7").unwrap(), ["B7"]);
/// assert!(expand_token("A1-B3").is_err());
/// ```
pub fn expand_token(token: &str) -> Result<Vec<InterfaceId>, RangeError> {
    let Some((first, last)) = token.split_once('-') else {
        return Ok(vec![InterfaceId::new(token)]);
    };

    let (module, start) = split_bound(token, first)?;
    let (end_module, end) = split_bound(token, last)?;

    if module != end_module {
        return Err(RangeError::PrefixMismatch {
            token: token.to_string(),
            start: module.to_string(),
            end: end_module.to_string(),
        });
    }

    if start > end {
        warn!(token = token; "Reversed range expands to no interfaces");
        return Ok(Vec::new());
    }

    let len = u64::from(end - start) + 1;
    if len > MAX_RANGE_LEN {
        return Err(RangeError::TooLarge {
            token: token.to_string(),
            len,
        });
    }

    Ok((start..=end)
        .map(|number| InterfaceId::from_parts(module, number))
        .collect())
}

/// Splits a range bound into its module prefix and port number.
fn split_bound<'a>(token: &str, bound: &'a str) -> Result<(&'a str, u32), RangeError> {
    let invalid = || RangeError::InvalidBound {
        token: token.to_string(),
        bound: bound.to_string(),
    };

    let digits_start = bound
        .find(|c: char| !c.is_ascii_alphabetic())
        .ok_or_else(invalid)?;
    let (module, digits) = bound.split_at(digits_start);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let number = digits.parse::<u32>().map_err(|_| invalid())?;

    Ok((module, number))
}

/// A set of interface names, iterated in natural port order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceSet(BTreeSet<InterfaceId>);

impl InterfaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one interface. Returns `false` when it was already present.
    pub fn insert(&mut self, id: InterfaceId) -> bool {
        self.0.insert(id)
    }

    /// Expands `token` and inserts the resulting interfaces.
    ///
    /// # Errors
    ///
    /// Returns the [`RangeError`] of [`expand_token`]; the set is left
    /// untouched in that case.
    pub fn add_token(&mut self, token: &str) -> Result<Vec<InterfaceId>, RangeError> {
        let ids = expand_token(token)?;
        self.0.extend(ids.iter().cloned());
        Ok(ids)
    }

    /// Expands every token of a comma-separated member spec and inserts the
    /// resulting interfaces, returning them in spec order.
    ///
    /// Empty tokens (`A1,,A2`) are skipped.
    ///
    /// # Errors
    ///
    /// Stops at the first token that fails to expand. Tokens before it have
    /// already been inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlandoc_core::range::InterfaceSet;
    ///
    /// let mut set = InterfaceSet::new();
    /// set.add_from_spec("A1-A3,B2").unwrap();
    /// assert_eq!(set.len(), 4);
    /// assert!(set.contains_name("A2"));
    /// assert!(!set.contains_name("A4"));
    /// ```
    pub fn add_from_spec(&mut self, spec: &str) -> Result<Vec<InterfaceId>, RangeError> {
        let mut added = Vec::new();
        for (_, token) in spec_tokens(spec) {
            added.extend(self.add_token(token)?);
        }
        Ok(added)
    }

    pub fn contains(&self, id: &InterfaceId) -> bool {
        self.0.contains(id)
    }

    /// Returns `true` when an interface with exactly this name is in the set.
    pub fn contains_name(&self, name: &str) -> bool {
        self.0.contains(&InterfaceId::new(name))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, InterfaceId> {
        self.0.iter()
    }
}

impl Extend<InterfaceId> for InterfaceSet {
    fn extend<T: IntoIterator<Item = InterfaceId>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<InterfaceId> for InterfaceSet {
    fn from_iter<T: IntoIterator<Item = InterfaceId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a InterfaceSet {
    type Item = &'a InterfaceId;
    type IntoIter = btree_set::Iter<'a, InterfaceId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn names(ids: &[InterfaceId]) -> Vec<&str> {
        ids.iter().map(InterfaceId::as_str).collect()
    }

    #[test]
    fn test_single_token() {
        assert_eq!(names(&expand_token("A5").unwrap()), ["A5"]);
    }

    #[test]
    fn test_single_character_token() {
        assert_eq!(names(&expand_token("7").unwrap()), ["7"]);
    }

    #[test]
    fn test_range_with_module() {
        assert_eq!(
            names(&expand_token("A1-A4").unwrap()),
            ["A1", "A2", "A3", "A4"]
        );
    }

    #[test]
    fn test_range_without_module() {
        assert_eq!(names(&expand_token("9-11").unwrap()), ["9", "10", "11"]);
    }

    #[test]
    fn test_range_of_one() {
        assert_eq!(names(&expand_token("B3-B3").unwrap()), ["B3"]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(expand_token("A5-A3").unwrap().is_empty());
    }

    #[test]
    fn test_prefix_mismatch() {
        let err = expand_token("A1-B4").unwrap_err();
        assert_eq!(
            err,
            RangeError::PrefixMismatch {
                token: "A1-B4".to_string(),
                start: "A".to_string(),
                end: "B".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "range `A1-B4` mixes module prefixes `A` and `B`"
        );
    }

    #[test]
    fn test_missing_port_number() {
        let err = expand_token("A-A4").unwrap_err();
        assert!(matches!(err, RangeError::InvalidBound { bound, .. } if bound == "A"));
    }

    #[test]
    fn test_trailing_text_in_bound() {
        assert!(matches!(
            expand_token("A1x-A4").unwrap_err(),
            RangeError::InvalidBound { .. }
        ));
    }

    #[test]
    fn test_empty_bound() {
        assert!(matches!(
            expand_token("A1-").unwrap_err(),
            RangeError::InvalidBound { .. }
        ));
    }

    #[test]
    fn test_bound_overflow() {
        assert!(matches!(
            expand_token("1-99999999999").unwrap_err(),
            RangeError::InvalidBound { .. }
        ));
    }

    #[test]
    fn test_too_large_range() {
        let err = expand_token("1-70000").unwrap_err();
        assert_eq!(
            err,
            RangeError::TooLarge {
                token: "1-70000".to_string(),
                len: 70_000,
            }
        );
    }

    #[test]
    fn test_range_at_limit() {
        assert_eq!(expand_token("1-65536").unwrap().len(), 65_536);
    }

    #[test]
    fn test_spec_tokens_skip_empty() {
        let tokens: Vec<_> = spec_tokens(",A1,,A2,").collect();
        assert_eq!(tokens, [(1, "A1"), (5, "A2")]);
    }

    #[test]
    fn test_add_from_spec_mixed() {
        let mut set = InterfaceSet::new();
        let added = set.add_from_spec("A1-A3,B2,7").unwrap();
        assert_eq!(names(&added), ["A1", "A2", "A3", "B2", "7"]);
        assert_eq!(set.len(), 5);
        for name in ["A1", "A2", "A3", "B2", "7"] {
            assert!(set.contains_name(name), "missing {name}");
        }
    }

    #[test]
    fn test_add_from_spec_is_idempotent() {
        let mut set = InterfaceSet::new();
        set.add_from_spec("A1-A4").unwrap();
        set.add_from_spec("A2,A3").unwrap();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_add_from_spec_stops_at_error() {
        let mut set = InterfaceSet::new();
        assert!(set.add_from_spec("A1,A2-B3,A5").is_err());
        assert!(set.contains_name("A1"));
        assert!(!set.contains_name("A5"));
    }

    #[test]
    fn test_iteration_is_naturally_ordered() {
        let set: InterfaceSet = ["A10", "A2", "B1", "A1"]
            .into_iter()
            .map(InterfaceId::new)
            .collect();
        let ordered: Vec<&str> = set.iter().map(InterfaceId::as_str).collect();
        assert_eq!(ordered, ["A1", "A2", "A10", "B1"]);
    }

    proptest! {
        #[test]
        fn test_range_expands_inclusive(module in "[A-Z]?", start in 0u32..500, len in 1u32..200) {
            let end = start + len - 1;
            let token = format!("{module}{start}-{module}{end}");
            let ids = expand_token(&token).unwrap();
            prop_assert_eq!(ids.len() as u32, len);
            prop_assert_eq!(ids.first().unwrap().as_str(), format!("{module}{start}"));
            prop_assert_eq!(ids.last().unwrap().as_str(), format!("{module}{end}"));
        }

        #[test]
        fn test_spec_tokens_cover_all_tokens(tokens in proptest::collection::vec("[A-Z0-9-]{0,4}", 0..8)) {
            let spec = tokens.join(",");
            let found: Vec<&str> = spec_tokens(&spec).map(|(_, token)| token).collect();
            let expected: Vec<&str> = tokens.iter().map(String::as_str).filter(|t| !t.is_empty()).collect();
            prop_assert_eq!(found, expected);
            for (offset, token) in spec_tokens(&spec) {
                prop_assert_eq!(&spec[offset..offset + token.len()], token);
            }
        }
    }
}
