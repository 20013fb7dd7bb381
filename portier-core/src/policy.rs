//! Access policy
//!
//! A fixed, ordered allow-list of tag strings compiled into the firmware.
//! Lookup is a linear exact-match scan; the list is a handful of entries,
//! so nothing smarter is warranted.

use crate::identifier::Identifier;

/// Outcome of evaluating one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decision {
    /// Identifier is on the list; the lock opens
    Granted,
    /// Identifier is not on the list
    Denied,
}

/// Static allow-list of badge identifiers
#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy<'a> {
    entries: &'a [&'a str],
}

impl<'a> AccessPolicy<'a> {
    /// Create a policy over `entries`, in match order
    pub const fn new(entries: &'a [&'a str]) -> Self {
        Self { entries }
    }

    /// The allow-list, in match order
    pub fn entries(&self) -> &'a [&'a str] {
        self.entries
    }

    /// Check whether `id` exactly equals one of the entries
    ///
    /// Case-sensitive, and length must match.
    pub fn is_authorized(&self, id: &Identifier) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.as_bytes() == id.as_bytes())
    }

    /// Evaluate `id` against the list
    pub fn decide(&self, id: &Identifier) -> Decision {
        if self.is_authorized(id) {
            Decision::Granted
        } else {
            Decision::Denied
        }
    }

    /// Entries no scanned badge can ever match
    ///
    /// The terminal only assembles identifiers of exactly ten `0-9`/`A-F`
    /// characters, so any other entry is dead weight in the list.
    pub fn unreachable_entries(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .copied()
            .filter(|entry| Identifier::parse(entry).is_err())
    }
}
