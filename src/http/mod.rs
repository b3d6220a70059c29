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

//! Turns a raw HTTP/1.x response head into cache information. Fetching the
//! response is left to the caller.

pub mod response;

pub use response::{inspect, Response};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("response head is incomplete")]
    Incomplete,
    #[error("malformed response head: {0}")]
    Parse(#[from] httparse::Error),
    #[error("response status {0} is not a success")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, ErrorKind>;
