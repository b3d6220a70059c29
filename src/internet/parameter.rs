// Copyright 2023 宋昊文
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub struct Parameter<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> From<&'a str> for Parameter<'a> {
    /// Build a Parameter from a `name[=value]` list element
    ///
    /// # Examples
    ///
    /// ```
    /// let p = rust_cache_inspect::internet::parameter::Parameter::from("max-age = 360");
    /// assert_eq!(p.name, "max-age");
    /// assert_eq!(p.value, Some("360"));
    ///
    /// let p = rust_cache_inspect::internet::parameter::Parameter::from("no-store");
    /// assert_eq!(p.name, "no-store");
    /// assert_eq!(p.value, None);
    /// ```
    fn from(s: &'a str) -> Parameter<'a> {
        if let Some((name, value)) = s.split_once('=') {
            return Parameter {
                name: name.trim(),
                value: Some(value.trim()),
            };
        }

        Parameter {
            name: s.trim(),
            value: None,
        }
    }
}
