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

use serde::Serialize;

use crate::ffi::log::platform_log;
use crate::internet::headers::cache_control::{
    self, CacheControlDirectives, ExtractorConfig, CACHE_CONTROL,
};
use crate::internet::lookup::HeaderLookup;

use super::decision::{self, WillCache, ETAG};

const LOG_TAG: &str = "cache_information";

/// Everything the header inspection found out about one response
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheInformation {
    pub has_cache_control: bool,
    pub cache_control_header: Option<String>,
    pub cache_control_directives: CacheControlDirectives,
    pub has_entity_tag: bool,
    pub entity_tag: Option<String>,
    #[serde(flatten)]
    pub will_cache: WillCache,
}

impl CacheInformation {
    pub fn will_cache(&self) -> bool {
        self.will_cache.will_cache()
    }

    pub fn will_cache_reason(&self) -> &'static str {
        self.will_cache.reason()
    }
}

/// Inspect the caching related headers of a response
///
/// # Examples
///
/// ```
/// use rust_cache_inspect::cache::parse_cache_headers;
///
/// let info = parse_cache_headers(&[("Cache-Control", "public, max-age=0")]);
///
/// assert!(info.will_cache());
/// assert_eq!(info.will_cache_reason(), "cache-control");
/// assert!(info.cache_control_directives.public);
/// ```
pub fn parse_cache_headers<H>(headers: &H) -> CacheInformation
where
    H: HeaderLookup + ?Sized,
{
    parse_cache_headers_with(headers, &ExtractorConfig::default())
}

pub fn parse_cache_headers_with<H>(headers: &H, config: &ExtractorConfig) -> CacheInformation
where
    H: HeaderLookup + ?Sized,
{
    let cache_control_header = headers.get(CACHE_CONTROL).map(|v| v.into_owned());
    let entity_tag = headers.get(ETAG).map(|v| v.into_owned());

    let will_cache = decision::decide_will_cache_with(headers, config);
    let cache_control_directives = cache_control::extract_directives_with(headers, config);

    platform_log(
        LOG_TAG,
        format!(
            "cache-control: {:?}, etag: {:?}, will cache: {} ({})",
            cache_control_header,
            entity_tag,
            will_cache.will_cache(),
            will_cache.reason()
        ),
    );

    CacheInformation {
        has_cache_control: cache_control_header.is_some(),
        cache_control_header,
        cache_control_directives,
        has_entity_tag: entity_tag.is_some(),
        entity_tag,
        will_cache,
    }
}
