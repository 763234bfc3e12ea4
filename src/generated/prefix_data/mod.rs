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

/// One `resources/<kind>/<language>/<country_code>.txt` file, sorted by prefix.
#[derive(Debug)]
pub struct PrefixFile {
    pub language: &'static str,
    pub country_code: u16,
    pub entries: &'static [(u64, &'static str)],
}

// GEOCODING, CARRIER and TIMEZONES
include!(concat!(env!("OUT_DIR"), "/prefix_data.rs"));
