// Copyright (C) 2025 The rdialnumber Authors
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

use strum::EnumIter;

/// How a `+`-prefixed number is mapped onto a country of the database.
///
/// For example, with a database holding `"1"` (US) before `"1242"`
/// (Bahamas), the number `+12425551234` resolves to:
/// - **LongestPrefix**: Bahamas, the longest international prefix wins.
/// - **FirstMatch**: US, the first entry in database order wins.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchStrategy {
    /// **Longest prefix match.**
    /// Every entry is examined and the one with the longest matching
    /// international prefix is returned. Entries with equal prefixes resolve
    /// to the earliest one. Independent of database ordering.
    #[default]
    LongestPrefix,
    /// **First match in database order.**
    /// The scan stops at the first entry whose international prefix matches.
    /// The caller must order the database so that no short prefix precedes a
    /// longer one starting with the same digits.
    FirstMatch,
}

/// The way a dialled number was written relative to its context number.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialledNumberFormat {
    /// **National format.**
    /// Starts with the national (trunk) prefix of the context country,
    /// e.g. `012345678` dialled from Hong Kong.
    National,
    /// **International format.**
    /// Already canonical: `+`, an international prefix known to the database,
    /// then the subscriber number, e.g. `+85212345678`.
    International,
}
