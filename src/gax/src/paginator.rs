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

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a type that can be iterated over asyncly when used with [Paginator].
pub trait PageableResponse {
    /// The continuation token for the next page, empty when this is the last
    /// page.
    fn next_page_token(&self) -> String;
}

/// An adapter that converts a list RPC into a [futures::Stream] of pages.
///
/// The service returns list results one page at a time, each page carrying a
/// `nextPageToken` for continuation. Pagination stays caller-driven: nothing
/// is fetched until the stream is polled, and dropping the stream stops the
/// iteration. The stream ends after the first page with an empty token, or
/// after the first error.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    pub fn new<F>(
        seed_token: String,
        execute: impl Fn(String) -> F + Clone + Send + 'static,
    ) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let tok = page.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    #[tokio::test]
    async fn paginator_follows_tokens() {
        let mut responses = VecDeque::new();
        responses.push_back(TestResponse {
            items: vec!["item1".to_string(), "item2".to_string()],
            next_page_token: "token2".to_string(),
        });
        responses.push_back(TestResponse {
            items: vec!["item3".to_string()],
            next_page_token: "".to_string(),
        });
        let mut expected_tokens = VecDeque::new();
        expected_tokens.push_back("".to_string());
        expected_tokens.push_back("token2".to_string());

        let state = Arc::new(Mutex::new(responses));
        let tokens = Arc::new(Mutex::new(expected_tokens));

        let execute = move |token: String| {
            let expected = tokens.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, expected);
            let resp = state.lock().unwrap().pop_front().unwrap();
            async move { Ok::<_, String>(resp) }
        };

        let mut pages = vec![];
        let mut stream = Paginator::new(String::new(), execute);
        while let Some(page) = stream.next().await {
            pages.push(page.unwrap());
        }
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].items, vec!["item1", "item2"]);
        assert_eq!(pages[1].items, vec!["item3"]);
    }

    #[tokio::test]
    async fn paginator_stops_on_error() {
        let execute = |_| async { Err::<TestResponse, String>("err".to_string()) };

        let mut paginator = Paginator::new(String::new(), execute);
        let mut count = 0;
        while let Some(resp) = paginator.next().await {
            match resp {
                Ok(_) => panic!("should not succeed"),
                Err(e) => {
                    assert_eq!(e, "err");
                    count += 1;
                }
            }
        }
        assert_eq!(count, 1);
    }
}
