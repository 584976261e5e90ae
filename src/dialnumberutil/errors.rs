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

use std::borrow::Cow;

use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

use super::helper_constants::{
    GENERIC_INVALID_NUMBER_MESSAGE, INCORRECT_FORMAT_MESSAGE, UNDEFINED_COUNTRY_PREFIX_MESSAGE,
};

/// The reason a number was rejected.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidNumberErrorKind {
    /// The string is not an optional `+` followed by digits, or it lacks the
    /// `+` where an international number is required.
    IncorrectFormat,
    /// The number is well formed and starts with `+`, but no country in the
    /// database owns its leading digits.
    UndefinedCountryPrefix,
}

impl InvalidNumberErrorKind {
    /// Message used when an error of this kind is built without a custom one.
    pub fn default_message(self) -> &'static str {
        match self {
            InvalidNumberErrorKind::IncorrectFormat => INCORRECT_FORMAT_MESSAGE,
            InvalidNumberErrorKind::UndefinedCountryPrefix => UNDEFINED_COUNTRY_PREFIX_MESSAGE,
        }
    }
}

/// Error returned by every fallible operation of
/// [`DialNumberUtil`](super::DialNumberUtil).
///
/// Both kinds describe bad user input rather than a fault of the library,
/// so the message is suitable to be shown back to whoever dialled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidNumberError {
    kind: InvalidNumberErrorKind,
    message: Cow<'static, str>,
}

impl InvalidNumberError {
    /// Creates an error with a custom message. An empty message is replaced
    /// by the generic "The number is invalid".
    pub fn new(kind: InvalidNumberErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            Cow::Borrowed(GENERIC_INVALID_NUMBER_MESSAGE)
        } else {
            message
        };
        Self { kind, message }
    }

    pub fn incorrect_format() -> Self {
        Self::from(InvalidNumberErrorKind::IncorrectFormat)
    }

    pub fn undefined_country_prefix() -> Self {
        Self::from(InvalidNumberErrorKind::UndefinedCountryPrefix)
    }

    pub fn kind(&self) -> InvalidNumberErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<InvalidNumberErrorKind> for InvalidNumberError {
    fn from(kind: InvalidNumberErrorKind) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(kind.default_message()),
        }
    }
}
