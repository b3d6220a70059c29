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

use std::fmt;

pub struct Header {
    name: Box<dyn AsRef<[u8]> + Send + Sync>,
    value: Box<dyn AsRef<[u8]> + Send + Sync>,
}

impl Header {
    pub fn new<N, V>(name: N, value: V) -> Header
    where
        N: AsRef<[u8]> + Send + Sync + 'static,
        V: AsRef<[u8]> + Send + Sync + 'static,
    {
        Header {
            name: Box::new(name),
            value: Box::new(value),
        }
    }

    pub fn get_name(&self) -> &[u8] {
        self.name.as_ref().as_ref()
    }

    pub fn get_value(&self) -> &[u8] {
        self.value.as_ref().as_ref()
    }
}

impl Clone for Header {
    fn clone(&self) -> Self {
        Header {
            name: Box::new(self.get_name().to_vec()),
            value: Box::new(self.get_value().to_vec()),
        }
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Header")
            .field(
                &String::from_utf8_lossy(self.get_name()),
                &String::from_utf8_lossy(self.get_value()),
            )
            .finish()
    }
}

/// First header named `name`, compared ignoring ASCII case
pub fn search<'a>(headers: &'a [Header], name: &[u8]) -> Option<&'a Header> {
    headers
        .iter()
        .find(|h| h.get_name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::{search, Header};

    #[test]
    fn search_ignoring_case() {
        let headers = vec![
            Header::new("Content-Type", "text/html"),
            Header::new("ETag", "\"abc\""),
            Header::new("etag", "\"def\""),
        ];

        let h = search(&headers, b"etag").unwrap();
        assert_eq!(h.get_value(), b"\"abc\"");

        let h = search(&headers, b"CONTENT-TYPE").unwrap();
        assert_eq!(h.get_value(), b"text/html");

        assert!(search(&headers, b"cache-control").is_none());
    }

    #[test]
    fn clone_keeps_bytes() {
        let h = Header::new(String::from("Cache-Control"), b"max-age=60".to_vec());
        let c = h.clone();
        assert_eq!(c.get_name(), b"Cache-Control");
        assert_eq!(c.get_value(), b"max-age=60");
    }
}
