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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Phone number input is empty")]
    EmptyInput,
    /// Both the region-less and the default-region parse failed.
    /// `source` is the error of the second attempt.
    #[error("Could not parse '{input}' as a phone number: {source}")]
    Unparsable {
        input: String,
        #[source]
        source: phonenumber::ParseError,
    },
}

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("Unknown default region '{0}'")]
    UnknownRegion(String),
}
