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

#[cfg(any(
    all(feature = "android", target_os = "android"),
    all(feature = "ohos", all(target_os = "linux", target_env = "ohos"))
))]
use std::ffi::CString;

#[cfg(any(
    all(feature = "android", target_os = "android"),
    all(feature = "ohos", all(target_os = "linux", target_env = "ohos"))
))]
use libc::c_char;

#[cfg(any(
    all(feature = "android", target_os = "android"),
    all(feature = "ohos", all(target_os = "linux", target_env = "ohos"))
))]
extern "C" {
    fn platform_log_impl(tag: *const c_char, message: *const c_char);
}

/// Writes a tagged diagnostic line.
///
/// Android and OHOS hosts receive the line through `platform_log_impl`,
/// every other target gets a `tracing` debug event with the tag attached.
#[cfg(debug_assertions)]
pub fn platform_log<M>(tag: &str, message: M)
where
    M: AsRef<str>,
{
    #[cfg(any(
        all(feature = "android", target_os = "android"),
        all(feature = "ohos", all(target_os = "linux", target_env = "ohos"))
    ))]
    if let (Ok(tag), Ok(message)) = (CString::new(tag), CString::new(message.as_ref())) {
        let c_tag: *const c_char = tag.as_ptr();
        let c_message: *const c_char = message.as_ptr();
        unsafe {
            platform_log_impl(c_tag, c_message);
        }
    }
    #[cfg(not(any(
        all(feature = "android", target_os = "android"),
        all(feature = "ohos", all(target_os = "linux", target_env = "ohos"))
    )))]
    tracing::debug!(tag = %tag, "{}", message.as_ref());
}

#[cfg(not(debug_assertions))]
pub fn platform_log<M>(_tag: &str, _message: M)
where
    M: AsRef<str>,
{
}

#[cfg(test)]
mod tests {
    use super::platform_log;

    #[test]
    fn accepts_borrowed_and_owned() {
        platform_log("log_test", "borrowed");
        platform_log("log_test", format!("owned {}", 1));
        platform_log("", String::new());
    }
}
