// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Helpers to encode optional query parameters.
//!
//! Most query parameters in the API are optional fields in the request
//! builders. An unset parameter must be absent from the encoded query
//! string, not present with an empty value: the service treats
//! `?filter=` differently from a missing `filter`.

/// Appends an optional query parameter, if set.
///
/// # Example
/// ```
/// # use gce_gax::query_parameter;
/// let builder = reqwest::Client::new().get("https://example.com/items");
/// let filter = Some("name eq demo".to_string());
/// let page_token: Option<String> = None;
/// let builder = query_parameter::optional(builder, "filter", &filter);
/// let builder = query_parameter::optional(builder, "pageToken", &page_token);
/// let request = builder.build().unwrap();
/// assert_eq!(request.url().query(), Some("filter=name+eq+demo"));
/// ```
pub fn optional<T: serde::Serialize>(
    builder: reqwest::RequestBuilder,
    name: &str,
    value: &Option<T>,
) -> reqwest::RequestBuilder {
    value
        .iter()
        .fold(builder, |builder, v| builder.query(&[(name, v)]))
}

/// Appends a required query parameter.
pub fn required<T: serde::Serialize>(
    builder: reqwest::RequestBuilder,
    name: &str,
    value: &T,
) -> reqwest::RequestBuilder {
    builder.query(&[(name, value)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn test_builder() -> reqwest::RequestBuilder {
        reqwest::Client::new().get("https://test.googleapis.com/compute/v1/unused")
    }

    #[test]
    fn unset_optionals_are_absent() {
        let builder = test_builder();
        let builder = optional::<String>(builder, "filter", &None);
        let builder = optional::<u32>(builder, "maxResults", &None);
        let request = builder.build().unwrap();
        assert_eq!(split_query(&request), Vec::<&str>::new());
    }

    #[test]
    fn set_optionals_are_present() {
        let builder = test_builder();
        let builder = optional(builder, "filter", &Some("name eq demo"));
        let builder = optional(builder, "maxResults", &Some(25_u32));
        let builder = optional(builder, "pageToken", &Some("token-1"));
        let request = builder.build().unwrap();
        assert_eq!(
            split_query(&request),
            vec!["filter=name+eq+demo", "maxResults=25", "pageToken=token-1"]
        );
    }

    #[test]
    fn required_always_present() {
        let builder = test_builder();
        let builder = required(builder, "alt", &"json");
        let request = builder.build().unwrap();
        assert_eq!(split_query(&request), vec!["alt=json"]);
    }
}
