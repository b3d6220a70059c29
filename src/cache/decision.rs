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

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::internet::headers::cache_control::{
    self, CacheControlDirectives, Directive, ExtractorConfig, CACHE_CONTROL,
};
use crate::internet::lookup::HeaderLookup;

pub const ETAG: &str = "etag";

/// Any of these in `Cache-Control` makes a response cacheable. `no-cache` and
/// `only-if-cached` only govern revalidation, so they count as well.
pub const CACHING_DIRECTIVES: [Directive; 13] = [
    Directive::Immutable,
    Directive::Public,
    Directive::Private,
    Directive::MaxAge,
    Directive::MaxStale,
    Directive::MinFresh,
    Directive::MustRevalidate,
    Directive::NoCache,
    Directive::OnlyIfCached,
    Directive::ProxyRevalidate,
    Directive::SharedMaxAge,
    Directive::StaleIfError,
    Directive::StaleWhileRevalidate,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheReason {
    ETag,
    CacheControl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoCacheReason {
    NoStore,
    NoCachingEnabled,
}

/// Outcome of the caching decision, the reason always travels with the verdict
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WillCache {
    Cached(CacheReason),
    NotCached(NoCacheReason),
}

impl CacheReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheReason::ETag => "etag",
            CacheReason::CacheControl => "cache-control",
        }
    }
}

impl NoCacheReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoCacheReason::NoStore => "no-store",
            NoCacheReason::NoCachingEnabled => "no-caching-enabled",
        }
    }
}

impl WillCache {
    pub fn will_cache(&self) -> bool {
        matches!(self, WillCache::Cached(_))
    }

    pub fn reason(&self) -> &'static str {
        match self {
            WillCache::Cached(reason) => reason.as_str(),
            WillCache::NotCached(reason) => reason.as_str(),
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            WillCache::Cached(CacheReason::CacheControl) => {
                "This response can be cached because of a directive in the Cache-Control header."
            }
            WillCache::Cached(CacheReason::ETag) => {
                "This response can be cached because the server responded with an ETag header."
            }
            WillCache::NotCached(NoCacheReason::NoStore) => {
                "This response cannot be cached because the server responded with no-store in the Cache-Control header."
            }
            WillCache::NotCached(NoCacheReason::NoCachingEnabled) => {
                "This response cannot be cached because the server did not respond with any caching headers such as Cache-Control or ETag."
            }
        }
    }
}

impl Serialize for WillCache {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("WillCache", 2)?;
        state.serialize_field("willCache", &self.will_cache())?;
        state.serialize_field("willCacheReason", self.reason())?;
        state.end()
    }
}

/// Rules are tried in order, the first match decides:
/// `no-store`, then any caching directive, then an `ETag`.
pub fn decide(
    has_cache_control: bool,
    directives: &CacheControlDirectives,
    has_entity_tag: bool,
) -> WillCache {
    if has_cache_control && directives.no_store {
        return WillCache::NotCached(NoCacheReason::NoStore);
    }

    if has_cache_control && CACHING_DIRECTIVES.iter().any(|d| directives.is_present(*d)) {
        return WillCache::Cached(CacheReason::CacheControl);
    }

    if has_entity_tag {
        return WillCache::Cached(CacheReason::ETag);
    }

    WillCache::NotCached(NoCacheReason::NoCachingEnabled)
}

pub fn decide_will_cache<H>(headers: &H) -> WillCache
where
    H: HeaderLookup + ?Sized,
{
    decide_will_cache_with(headers, &ExtractorConfig::default())
}

pub fn decide_will_cache_with<H>(headers: &H, config: &ExtractorConfig) -> WillCache
where
    H: HeaderLookup + ?Sized,
{
    let directives = cache_control::extract_directives_with(headers, config);
    decide(headers.has(CACHE_CONTROL), &directives, headers.has(ETAG))
}
