// Copyright (C) 2011 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

/// A sorted map from digit prefixes of `<country code><national number>`
/// to a description (place name, carrier name or zone list).
///
/// Lookups return the value of the longest prefix that matches the
/// given digits, the same contract as libphonenumber's `PhonePrefixMap`.
#[derive(Debug, Clone)]
pub struct PrefixTable {
    /// Sorted by prefix, no duplicate prefixes.
    entries: Vec<(u64, &'static str)>,
    /// Distinct digit counts of the stored prefixes, longest first.
    possible_lengths: Vec<usize>,
}

impl PrefixTable {
    pub fn new(entries: &[(u64, &'static str)]) -> Self {
        let mut entries = entries.to_vec();
        entries.sort_by_key(|(prefix, _)| *prefix);
        entries.dedup_by_key(|(prefix, _)| *prefix);

        let mut buf = itoa::Buffer::new();
        let mut possible_lengths = entries
            .iter()
            .map(|(prefix, _)| buf.format(*prefix).len())
            .collect::<Vec<_>>();
        possible_lengths.sort_unstable_by(|a, b| b.cmp(a));
        possible_lengths.dedup();

        trace!(
            "Built prefix table with {} entries, prefix lengths {:?}",
            entries.len(),
            possible_lengths
        );
        Self { entries, possible_lengths }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the description of the longest prefix of `digits`, or `None`
    /// when no stored prefix matches. `digits` must be ASCII decimal digits.
    pub fn lookup(&self, digits: &str) -> Option<&'static str> {
        for &length in &self.possible_lengths {
            if length > digits.len() {
                continue;
            }
            // Lengths above 19 digits cannot be stored in the table anyway
            let Ok(prefix) = digits[..length].parse::<u64>() else {
                continue;
            };
            if let Ok(index) = self.entries.binary_search_by_key(&prefix, |(p, _)| *p) {
                return Some(self.entries[index].1);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::PrefixTable;

    const ENTRIES: &[(u64, &str)] = &[
        (1415, "California"),
        (141555, "San Francisco, CA"),
        (1212, "New York, NY"),
        (44, "United Kingdom"),
    ];

    #[test]
    fn longest_prefix_wins() {
        let table = PrefixTable::new(ENTRIES);
        assert_eq!(Some("San Francisco, CA"), table.lookup("14155552671"));
        assert_eq!(Some("California"), table.lookup("14154442671"));
        assert_eq!(Some("New York, NY"), table.lookup("12125550000"));
    }

    #[test]
    fn no_match_and_short_input() {
        let table = PrefixTable::new(ENTRIES);
        assert_eq!(None, table.lookup("33142685300"));
        assert_eq!(None, table.lookup("14"));
        assert_eq!(Some("United Kingdom"), table.lookup("44"));
        assert_eq!(None, table.lookup(""));
    }

    #[test]
    fn unsorted_input_is_accepted() {
        let table = PrefixTable::new(&[(49, "Germany"), (1, "NANP"), (49, "Duplicate")]);
        assert_eq!(2, table.len());
        assert_eq!(Some("Germany"), table.lookup("4930123456"));
        assert_eq!(Some("NANP"), table.lookup("12025550100"));
    }
}
