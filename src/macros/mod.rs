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

/// This macro implements `FieldSet` for a report record by listing
/// its reported fields in output order.
///
/// Every listed field becomes one report key named after the field,
/// so the field order here is the order the presenter prints.
/// Struct fields that are not listed stay out of the report.
macro_rules! impl_field_set {
    ($record:ty { $($field:ident),* $(,)? }) => {
        impl $crate::analyzer::report::FieldSet for $record {
            fn fields(&self) -> Vec<$crate::analyzer::report::Field> {
                vec![
                    $($crate::analyzer::report::Field::new(
                        stringify!($field),
                        self.$field.clone(),
                    ),)*
                ]
            }
        }
    };
}

pub(crate) use impl_field_set;

/// Renders enums with a `Display` impl as text report values.
macro_rules! text_value_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $crate::analyzer::report::FieldValue {
                fn from(value: $ty) -> Self {
                    $crate::analyzer::report::FieldValue::Text(value.to_string())
                }
            }
        )*
    };
}

pub(crate) use text_value_from_display;

macro_rules! impl_report_section {
    ($($record:ty => $title:literal),* $(,)?) => {
        $(
            impl $crate::analyzer::report::ReportSection for $record {
                fn title(&self) -> &'static str {
                    $title
                }
            }
        )*
    };
}

pub(crate) use impl_report_section;
