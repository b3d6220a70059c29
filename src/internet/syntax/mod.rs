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

use std::str::Split;

/// Iterate the elements of a comma separated header list, each trimmed of surrounding whitespace
///
/// Empty elements are kept so that positions stay stable, quoted commas are not special
///
/// # Examples
///
/// ```
/// let a = "other,    IMMUtable , test";
///
/// let mut iter = rust_cache_inspect::internet::syntax::list_elements(a);
///
/// assert_eq!(iter.next(), Some("other"));
/// assert_eq!(iter.next(), Some("IMMUtable"));
/// assert_eq!(iter.next(), Some("test"));
/// assert_eq!(iter.next(), None);
/// ```
pub fn list_elements(s: &str) -> ListElements<'_> {
    ListElements {
        iter: s.split(','),
    }
}

pub struct ListElements<'a> {
    iter: Split<'a, char>,
}

impl<'a> Iterator for ListElements<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<&'a str> {
        self.iter.next().map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::list_elements;

    #[test]
    fn blank_list() {
        let v: Vec<&str> = list_elements("").collect();
        assert_eq!(v, vec![""]);

        let v: Vec<&str> = list_elements("  ,\t").collect();
        assert_eq!(v, vec!["", ""]);
    }
}
