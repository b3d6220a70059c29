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

//! `Cache-Control` directives as registered for HTTP caching (RFC 7234, RFC 5861).

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::internet::lookup::HeaderLookup;
use crate::internet::parameter::Parameter;
use crate::internet::syntax;

pub const CACHE_CONTROL: &str = "cache-control";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    Public,
    Private,
    Immutable,
    NoCache,
    NoStore,
    NoTransform,
    MustRevalidate,
    ProxyRevalidate,
    OnlyIfCached,
    MaxAge,
    SharedMaxAge,
    MaxStale,
    MinFresh,
    StaleWhileRevalidate,
    StaleIfError,
}

impl Directive {
    pub const ALL: [Directive; 15] = [
        Directive::Public,
        Directive::Private,
        Directive::Immutable,
        Directive::NoCache,
        Directive::NoStore,
        Directive::NoTransform,
        Directive::MustRevalidate,
        Directive::ProxyRevalidate,
        Directive::OnlyIfCached,
        Directive::MaxAge,
        Directive::SharedMaxAge,
        Directive::MaxStale,
        Directive::MinFresh,
        Directive::StaleWhileRevalidate,
        Directive::StaleIfError,
    ];

    /// Token spelling on the wire, lowercase and hyphenated
    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::Public => "public",
            Directive::Private => "private",
            Directive::Immutable => "immutable",
            Directive::NoCache => "no-cache",
            Directive::NoStore => "no-store",
            Directive::NoTransform => "no-transform",
            Directive::MustRevalidate => "must-revalidate",
            Directive::ProxyRevalidate => "proxy-revalidate",
            Directive::OnlyIfCached => "only-if-cached",
            Directive::MaxAge => "max-age",
            Directive::SharedMaxAge => "s-maxage",
            Directive::MaxStale => "max-stale",
            Directive::MinFresh => "min-fresh",
            Directive::StaleWhileRevalidate => "stale-while-revalidate",
            Directive::StaleIfError => "stale-if-error",
        }
    }

    /// Whether the directive carries a `=delta-seconds` argument
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Directive::MaxAge
                | Directive::SharedMaxAge
                | Directive::MaxStale
                | Directive::MinFresh
                | Directive::StaleWhileRevalidate
                | Directive::StaleIfError
        )
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cache-control directive: {0}")]
pub struct UnknownDirective(pub String);

impl FromStr for Directive {
    type Err = UnknownDirective;

    fn from_str(s: &str) -> Result<Directive, UnknownDirective> {
        let name = s.trim();
        Directive::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownDirective(String::from(name)))
    }
}

impl Serialize for Directive {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Argument of a numeric directive that was present in the header.
///
/// `Malformed` is kept for a directive whose `=` part is missing or does not
/// start with digits, so that callers can still tell it apart from an absent one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaSeconds {
    Seconds(u64),
    Malformed,
}

impl DeltaSeconds {
    /// Leading whitespace and a `+` sign are skipped, then the leading run of
    /// digits is read. Values beyond `u64` saturate.
    pub fn parse(s: &str) -> DeltaSeconds {
        let s = s.trim_start();
        let s = s.strip_prefix('+').unwrap_or(s);
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return DeltaSeconds::Malformed;
        }

        match s[..digits].parse::<u64>() {
            Ok(i) => DeltaSeconds::Seconds(i),
            Err(_) => DeltaSeconds::Seconds(u64::MAX),
        }
    }

    pub fn seconds(&self) -> Option<u64> {
        match self {
            DeltaSeconds::Seconds(i) => Some(*i),
            DeltaSeconds::Malformed => None,
        }
    }
}

impl Serialize for DeltaSeconds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DeltaSeconds::Seconds(i) => serializer.serialize_u64(*i),
            DeltaSeconds::Malformed => serializer.serialize_none(),
        }
    }
}

/// How a numeric directive's name is looked for among the list elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectiveMatching {
    /// First element containing the name anywhere, `x-max-age-foo=5` counts as `max-age`
    #[default]
    Substring,
    /// First element whose name part equals the directive name
    Exact,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExtractorConfig {
    pub matching: DirectiveMatching,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheControlDirectives {
    pub public: bool,
    pub private: bool,
    pub immutable: bool,
    pub no_cache: bool,
    pub no_store: bool,
    pub no_transform: bool,
    pub must_revalidate: bool,
    pub proxy_revalidate: bool,
    pub only_if_cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<DeltaSeconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_max_age: Option<DeltaSeconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stale: Option<DeltaSeconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_fresh: Option<DeltaSeconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_while_revalidate: Option<DeltaSeconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_if_error: Option<DeltaSeconds>,
}

impl CacheControlDirectives {
    pub fn flag(&self, directive: Directive) -> bool {
        match directive {
            Directive::Public => self.public,
            Directive::Private => self.private,
            Directive::Immutable => self.immutable,
            Directive::NoCache => self.no_cache,
            Directive::NoStore => self.no_store,
            Directive::NoTransform => self.no_transform,
            Directive::MustRevalidate => self.must_revalidate,
            Directive::ProxyRevalidate => self.proxy_revalidate,
            Directive::OnlyIfCached => self.only_if_cached,
            _ => false,
        }
    }

    pub fn delta_seconds(&self, directive: Directive) -> Option<DeltaSeconds> {
        match directive {
            Directive::MaxAge => self.max_age,
            Directive::SharedMaxAge => self.shared_max_age,
            Directive::MaxStale => self.max_stale,
            Directive::MinFresh => self.min_fresh,
            Directive::StaleWhileRevalidate => self.stale_while_revalidate,
            Directive::StaleIfError => self.stale_if_error,
            _ => None,
        }
    }

    /// A flag that is set or a numeric directive that was found, malformed included
    pub fn is_present(&self, directive: Directive) -> bool {
        if directive.is_numeric() {
            self.delta_seconds(directive).is_some()
        } else {
            self.flag(directive)
        }
    }

    /// Directives found in the header, in [`Directive::ALL`] order
    pub fn present(&self) -> Vec<Directive> {
        Directive::ALL
            .into_iter()
            .filter(|d| self.is_present(*d))
            .collect()
    }
}

/// Parse a raw `Cache-Control` value, unknown elements are ignored
pub fn parse(s: &str, config: &ExtractorConfig) -> CacheControlDirectives {
    let lowered = s.to_lowercase();
    let elements: Vec<&str> = syntax::list_elements(&lowered).collect();

    let flag = |d: Directive| elements.iter().any(|e| *e == d.as_str());
    let delta_seconds = |d: Directive| find_delta_seconds(&elements, d, config.matching);

    CacheControlDirectives {
        public: flag(Directive::Public),
        private: flag(Directive::Private),
        immutable: flag(Directive::Immutable),
        no_cache: flag(Directive::NoCache),
        no_store: flag(Directive::NoStore),
        no_transform: flag(Directive::NoTransform),
        must_revalidate: flag(Directive::MustRevalidate),
        proxy_revalidate: flag(Directive::ProxyRevalidate),
        only_if_cached: flag(Directive::OnlyIfCached),
        max_age: delta_seconds(Directive::MaxAge),
        shared_max_age: delta_seconds(Directive::SharedMaxAge),
        max_stale: delta_seconds(Directive::MaxStale),
        min_fresh: delta_seconds(Directive::MinFresh),
        stale_while_revalidate: delta_seconds(Directive::StaleWhileRevalidate),
        stale_if_error: delta_seconds(Directive::StaleIfError),
    }
}

fn find_delta_seconds(
    elements: &[&str],
    directive: Directive,
    matching: DirectiveMatching,
) -> Option<DeltaSeconds> {
    let name = directive.as_str();
    let param = match matching {
        DirectiveMatching::Substring => elements
            .iter()
            .find(|e| e.contains(name))
            .map(|e| Parameter::from(*e)),
        DirectiveMatching::Exact => elements
            .iter()
            .map(|e| Parameter::from(*e))
            .find(|p| p.name == name),
    }?;

    Some(match param.value {
        Some(value) => DeltaSeconds::parse(value),
        None => DeltaSeconds::Malformed,
    })
}

/// Directives of the `Cache-Control` header, an absent header reads as an empty one
pub fn extract_directives<H>(headers: &H) -> CacheControlDirectives
where
    H: HeaderLookup + ?Sized,
{
    extract_directives_with(headers, &ExtractorConfig::default())
}

pub fn extract_directives_with<H>(headers: &H, config: &ExtractorConfig) -> CacheControlDirectives
where
    H: HeaderLookup + ?Sized,
{
    match headers.get(CACHE_CONTROL) {
        Some(value) => parse(&value, config),
        None => parse("", config),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        extract_directives, extract_directives_with, parse, CacheControlDirectives, DeltaSeconds,
        Directive, DirectiveMatching, ExtractorConfig,
    };

    fn directives(value: &str) -> CacheControlDirectives {
        extract_directives(&[("cache-control", value)])
    }

    #[test]
    fn flags() {
        assert!(directives("other, public, test, foo, bar").public);
        assert!(directives("other, PRIVATE, test, foo, bar").private);
        assert!(directives("other,    IMMUtable , test, foo, bar").immutable);
        assert!(directives("other,    no-cache , test, foo, bar").no_cache);
        assert!(directives("other,    no-store , test, foo, bar").no_store);
        assert!(directives("other,    no-transform , test, foo, bar").no_transform);
        assert!(directives("other,    must-revalidate , test, foo, bar").must_revalidate);
        assert!(directives("other,    proxy-revalidate , test, foo, bar").proxy_revalidate);
        assert!(directives("other,    only-if-cached , test, foo, bar").only_if_cached);

        assert_eq!(directives("  PUBLIC "), directives("public"));
        assert!(!directives("publicity").public);
    }

    #[test]
    fn delta_seconds() {
        let d = directives("other,    max-age=360 , test, foo, bar");
        assert_eq!(d.max_age, Some(DeltaSeconds::Seconds(360)));

        let d = directives("other,    s-maxage=0 , test, foo, bar");
        assert_eq!(d.shared_max_age, Some(DeltaSeconds::Seconds(0)));
        assert_eq!(d.max_age, None);

        let d = directives("other,    max-stale=1234567 , test, foo, bar");
        assert_eq!(d.max_stale, Some(DeltaSeconds::Seconds(1234567)));

        let d = directives("other,    min-fresh=39992183 , test, foo, bar");
        assert_eq!(d.min_fresh, Some(DeltaSeconds::Seconds(39992183)));

        let d = directives("other,    stale-if-error=39992183 , test, foo, bar");
        assert_eq!(d.stale_if_error, Some(DeltaSeconds::Seconds(39992183)));

        let d = directives("other,    stale-while-revalidate=3600 , test, foo, bar");
        assert_eq!(d.stale_while_revalidate, Some(DeltaSeconds::Seconds(3600)));
    }

    #[test]
    fn empty_header() {
        assert_eq!(directives(""), CacheControlDirectives::default());
        assert_eq!(directives("   "), CacheControlDirectives::default());

        let none: [(&str, &str); 0] = [];
        assert_eq!(extract_directives(&none), CacheControlDirectives::default());
        assert!(extract_directives(&none).present().is_empty());
    }

    #[test]
    fn malformed_values() {
        assert_eq!(directives("max-age").max_age, Some(DeltaSeconds::Malformed));
        assert_eq!(directives("max-age=").max_age, Some(DeltaSeconds::Malformed));
        assert_eq!(directives("max-age=abc").max_age, Some(DeltaSeconds::Malformed));
        assert_eq!(directives("max-age=-5").max_age, Some(DeltaSeconds::Malformed));
        assert_eq!(directives("max-age=12abc").max_age, Some(DeltaSeconds::Seconds(12)));
        assert_eq!(directives("max-age = 7").max_age, Some(DeltaSeconds::Seconds(7)));
        assert_eq!(directives("max-age=+7").max_age, Some(DeltaSeconds::Seconds(7)));
        assert_eq!(
            directives("max-age=99999999999999999999999").max_age,
            Some(DeltaSeconds::Seconds(u64::MAX))
        );
        assert_eq!(DeltaSeconds::Malformed.seconds(), None);
    }

    #[test]
    fn first_match_wins() {
        let d = directives("max-age=1, max-age=2");
        assert_eq!(d.max_age, Some(DeltaSeconds::Seconds(1)));

        let d = directives("max-age, max-age=2");
        assert_eq!(d.max_age, Some(DeltaSeconds::Malformed));
    }

    #[test]
    fn substring_matching() {
        let d = directives("x-max-age-foo=5, max-age=10");
        assert_eq!(d.max_age, Some(DeltaSeconds::Seconds(5)));

        let config = ExtractorConfig {
            matching: DirectiveMatching::Exact,
        };
        let headers = [("Cache-Control", "x-max-age-foo=5, max-age=10")];
        let d = extract_directives_with(&headers, &config);
        assert_eq!(d.max_age, Some(DeltaSeconds::Seconds(10)));

        let d = parse("x-max-age-foo=5", &config);
        assert_eq!(d.max_age, None);
    }

    #[test]
    fn idempotent() {
        let headers = [("Cache-Control", "public, max-age=0, stale-if-error=bad")];
        assert_eq!(extract_directives(&headers), extract_directives(&headers));
    }

    #[test]
    fn present_in_catalogue_order() {
        let d = directives("max-age=60, no-transform, public, s-maxage=x");
        assert_eq!(
            d.present(),
            vec![
                Directive::Public,
                Directive::NoTransform,
                Directive::MaxAge,
                Directive::SharedMaxAge
            ]
        );
        assert!(d.is_present(Directive::SharedMaxAge));
        assert!(!d.is_present(Directive::NoStore));
    }

    #[test]
    fn directive_names() {
        for d in Directive::ALL {
            assert_eq!(d.as_str().parse::<Directive>(), Ok(d));
            assert_eq!(d.to_string(), d.as_str());
        }
        assert_eq!(" S-MaxAge ".parse::<Directive>(), Ok(Directive::SharedMaxAge));
        assert!("no-caching".parse::<Directive>().is_err());
        assert!(Directive::StaleIfError.is_numeric());
        assert!(!Directive::OnlyIfCached.is_numeric());
    }

    #[test]
    fn serialized_shape() {
        let d = directives("public, max-age=0, min-fresh=oops");
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["public"], serde_json::json!(true));
        assert_eq!(v["noStore"], serde_json::json!(false));
        assert_eq!(v["maxAge"], serde_json::json!(0));
        assert!(v["minFresh"].is_null());
        assert!(v.get("minFresh").is_some());
        assert!(v.get("sharedMaxAge").is_none());
    }
}
