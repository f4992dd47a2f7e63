//! Test data generators for thread export BDD tests.

use std::str::FromStr;

use serde_json::{Value, json};

/// Number of output rows for parameterised steps.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowCount(usize);

impl RowCount {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for RowCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

fn comment(id: &str, body: &str, score: i64, created_utc: i64, replies: &Value) -> Value {
    json!({
        "kind": "t1",
        "data": {
            "id": id,
            "author": format!("user-{id}"),
            "body": body,
            "score": score,
            "created_utc": created_utc,
            "replies": { "kind": "Listing", "data": { "children": replies } }
        }
    })
}

fn thread_response(comments: &Value) -> Value {
    json!([
        { "kind": "Listing", "data": { "children": [
            { "kind": "t3", "data": {
                "id": "abc123", "title": "Weekly thread", "author": "op", "subreddit": "rust"
            } }
        ] } },
        { "kind": "Listing", "data": { "children": comments } }
    ])
}

/// `a` (with reply `b`) followed by `c`; `c` is the oldest comment.
pub(crate) fn nested_thread() -> Value {
    thread_response(&json!([
        comment("a", "first", 5, 300, &json!([comment("b", "reply", 1, 400, &json!([]))])),
        comment("c", "second", 9, 100, &json!([])),
        { "kind": "more", "data": { "id": "m1", "children": ["z"] } }
    ]))
}

/// `a` carries a deleted reply whose own reply must not surface.
pub(crate) fn deleted_branch_thread() -> Value {
    let orphan = comment("x", "orphan", 3, 500, &json!([]));
    thread_response(&json!([
        comment(
            "a",
            "first",
            5,
            300,
            &json!([comment("b", "[deleted]", 0, 400, &json!([orphan]))])
        ),
        comment("c", "second", 9, 100, &json!([])),
    ]))
}
