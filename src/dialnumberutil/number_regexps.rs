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

use std::sync::LazyLock;

use regex::Regex;

use super::helper_constants::VALID_NUMBER_PATTERN;

pub(super) static NUMBER_REGEXPS: LazyLock<NumberRegExps> = LazyLock::new(NumberRegExps::new);

pub(super) struct NumberRegExps {
    /// Whole-string match of a dialable token: a single optional leading
    /// plus sign and at least one ASCII digit. No punctuation, whitespace or
    /// letters are allowed anywhere.
    pub valid_number_pattern: Regex,
}

impl NumberRegExps {
    fn new() -> Self {
        Self {
            valid_number_pattern: Regex::new(&format!("^(?:{})$", VALID_NUMBER_PATTERN)).unwrap(),
        }
    }
}
