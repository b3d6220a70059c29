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

use std::borrow::Cow;
use std::collections::HashMap;

use super::header::{self, Header};

/// Read access to a set of response headers.
///
/// Names are matched ignoring ASCII case. If a name occurs more than once
/// only the first occurrence is returned, values are never merged.
pub trait HeaderLookup {
    fn get(&self, name: &str) -> Option<Cow<'_, str>>;

    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<T> HeaderLookup for &T
where
    T: HeaderLookup + ?Sized,
{
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).get(name)
    }
}

impl HeaderLookup for [Header] {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        header::search(self, name.as_bytes()).map(|h| String::from_utf8_lossy(h.get_value()))
    }
}

impl HeaderLookup for Vec<Header> {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        <[Header] as HeaderLookup>::get(self, name)
    }
}

impl HeaderLookup for [httparse::Header<'_>] {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| String::from_utf8_lossy(h.value))
    }
}

impl HeaderLookup for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        if let Some(value) = HashMap::get(self, name) {
            return Some(Cow::Borrowed(value.as_str()));
        }

        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| Cow::Borrowed(v.as_str()))
    }
}

impl HeaderLookup for [(&str, &str)] {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| Cow::Borrowed(*v))
    }
}

impl<const N: usize> HeaderLookup for [(&str, &str); N] {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        <[(&str, &str)] as HeaderLookup>::get(self, name)
    }
}
