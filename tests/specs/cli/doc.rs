// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use serde_json::{json, Value};

fn doc(input: &str) -> Value {
    let stdout = stdout_of(tix().args(["doc", "-"]).write_stdin(input));
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn doc_task_list_is_one_bullet_list() {
    let value = doc("- [ ] x\n- [ ] y");
    assert_eq!(
        value,
        json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "bulletList",
                "content": [
                    {
                        "type": "listItem",
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "x" }]
                        }]
                    },
                    {
                        "type": "listItem",
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "y" }]
                        }]
                    }
                ]
            }]
        })
    );
}

#[test]
fn doc_inline_marks() {
    let value = doc("**a** and `b`");
    assert_eq!(
        value["content"][0]["content"],
        json!([
            { "type": "text", "text": "a", "marks": [{ "type": "strong" }] },
            { "type": "text", "text": " and " },
            { "type": "text", "text": "b", "marks": [{ "type": "code" }] }
        ])
    );
}

#[test]
fn doc_blank_line_splits_lists() {
    let value = doc("- a\n\n- b\n");
    let content = value["content"].as_array().unwrap();
    assert_eq!(content.len(), 2);
    assert!(content.iter().all(|n| n["type"] == "bulletList"));
}

#[test]
fn doc_reads_file() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "notes.md", "## Goal\n\nShip it\n");
    let stdout = stdout_of(tix_in(temp.path()).args(["doc", "notes.md"]));
    let value: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["content"][0]["type"], "heading");
    assert_eq!(value["content"][0]["attrs"]["level"], 2);
    assert_eq!(value["content"][1]["type"], "paragraph");
}
