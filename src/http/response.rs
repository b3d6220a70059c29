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

use httparse::{Response as HttpResponse, Status, EMPTY_HEADER};

use crate::cache::{self, CacheInformation};
use crate::ffi::log::platform_log;
use crate::internet::header::Header;
use crate::internet::headers::cache_control::ExtractorConfig;

use super::{ErrorKind, Result};

const LOG_TAG: &str = "http_response";

const MAX_HEADERS: usize = 64;

pub struct Response {
    pub status_code: u16,
    pub reason_phrase: Vec<u8>,
    pub headers: Vec<Header>,
}

impl Response {
    pub fn from(resp: &HttpResponse) -> Option<Response> {
        if let (Some(code), Some(reason)) = (resp.code, resp.reason) {
            platform_log(LOG_TAG, format!("HTTP/1.1 {} {}", code, reason));
            let mut headers = Vec::new();

            for h in &*resp.headers {
                platform_log(
                    LOG_TAG,
                    format!("{}: {}", h.name, String::from_utf8_lossy(h.value)),
                );
                headers.push(Header::new(String::from(h.name), h.value.to_vec()));
            }

            return Some(Response {
                status_code: code,
                reason_phrase: reason.as_bytes().to_vec(),
                headers,
            });
        }

        None
    }

    /// Decode a response head, status line up to the empty line, anything
    /// after it is left alone
    pub fn parse(buf: &[u8]) -> Result<Response> {
        let mut headers = [EMPTY_HEADER; MAX_HEADERS];
        let mut resp = HttpResponse::new(&mut headers);

        match resp.parse(buf)? {
            Status::Complete(_) => Response::from(&resp).ok_or(ErrorKind::Incomplete),
            Status::Partial => Err(ErrorKind::Incomplete),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn cache_information(&self) -> CacheInformation {
        cache::parse_cache_headers(&self.headers)
    }

    pub fn cache_information_with(&self, config: &ExtractorConfig) -> CacheInformation {
        cache::parse_cache_headers_with(&self.headers, config)
    }
}

/// Cache information for a successful response, other status codes are refused
/// since an error page says nothing about how the resource itself is cached
pub fn inspect(buf: &[u8]) -> Result<CacheInformation> {
    let resp = Response::parse(buf)?;
    if !resp.is_success() {
        platform_log(
            LOG_TAG,
            format!("refusing to inspect status {}", resp.status_code),
        );
        return Err(ErrorKind::Status(resp.status_code));
    }

    Ok(resp.cache_information())
}

#[cfg(test)]
mod tests {
    use super::{inspect, Response};
    use crate::cache::{CacheReason, WillCache};
    use crate::http::ErrorKind;
    use crate::internet::lookup::HeaderLookup;

    const MAX_AGE: &[u8] = b"HTTP/1.1 200 OK\r\n\
        Content-Type: text/html\r\n\
        Cache-Control: public, max-age=31536000\r\n\
        ETag: \"33a64df5\"\r\n\
        \r\n\
        <html></html>";

    #[test]
    fn parse_head() {
        let resp = Response::parse(MAX_AGE).unwrap();
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.reason_phrase, b"OK");
        assert_eq!(resp.headers.len(), 3);
        assert!(resp.is_success());
        assert_eq!(
            HeaderLookup::get(&resp.headers, "etag").as_deref(),
            Some("\"33a64df5\"")
        );
    }

    #[test]
    fn inspect_success() {
        let info = inspect(MAX_AGE).unwrap();
        assert_eq!(info.will_cache, WillCache::Cached(CacheReason::CacheControl));
        assert_eq!(info.entity_tag.as_deref(), Some("\"33a64df5\""));
        assert!(info.cache_control_directives.public);
    }

    #[test]
    fn incomplete_head() {
        let r = Response::parse(b"HTTP/1.1 200 OK\r\nCache-Control: no-store\r\n");
        assert!(matches!(r, Err(ErrorKind::Incomplete)));
    }

    #[test]
    fn malformed_head() {
        let r = Response::parse(b"NOT HTTP\r\n\r\n");
        assert!(matches!(r, Err(ErrorKind::Parse(_))));
    }

    #[test]
    fn error_status() {
        let r = inspect(b"HTTP/1.1 404 Not Found\r\nETag: \"x\"\r\n\r\n");
        assert!(matches!(r, Err(ErrorKind::Status(404))));

        let r = inspect(b"HTTP/1.1 304 Not Modified\r\n\r\n");
        assert!(matches!(r, Err(ErrorKind::Status(304))));
    }
}
