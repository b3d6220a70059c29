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

//! Reads the `Cache-Control` and `ETag` headers of an HTTP response and
//! explains whether, and why, an HTTP cache would store it.
//!
//! ```
//! use rust_cache_inspect::cache::parse_cache_headers;
//!
//! let info = parse_cache_headers(&[("cache-control", "no-store, max-age=60")]);
//! assert!(!info.will_cache());
//! assert_eq!(info.will_cache_reason(), "no-store");
//! ```

pub mod cache;
pub mod ffi;
pub mod http;
pub mod internet;
