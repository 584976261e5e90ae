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

use super::helper_constants::DEFAULT_NATIONAL_PREFIX;

/// One row of the country database.
///
/// The database itself is a plain `[CountryEntry]` slice owned by the caller.
/// The library never copies or modifies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountryEntry {
    /// Short identifier of the country, e.g. `"HK"`. Label only.
    code: String,
    /// Country calling code without the leading `+`, e.g. `"852"`.
    international_prefix: String,
    /// Trunk prefix dialled before a national number, `"0"` when absent.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    national_prefix: Option<String>,
}

impl CountryEntry {
    pub fn new(code: impl Into<String>, international_prefix: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            international_prefix: international_prefix.into(),
            national_prefix: None,
        }
    }

    pub fn with_national_prefix(mut self, national_prefix: impl Into<String>) -> Self {
        self.national_prefix = Some(national_prefix.into());
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn international_prefix(&self) -> &str {
        &self.international_prefix
    }

    /// Returns the effective national prefix, falling back to `"0"`.
    pub fn national_prefix(&self) -> &str {
        self.national_prefix
            .as_deref()
            .unwrap_or(DEFAULT_NATIONAL_PREFIX)
    }

    /// Returns true when the entry declared its own national prefix.
    pub fn has_explicit_national_prefix(&self) -> bool {
        self.national_prefix.is_some()
    }
}
