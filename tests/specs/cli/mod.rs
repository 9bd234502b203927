// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod apply_keys;
mod common;
mod config;
mod doc;
mod help;
mod links;
mod parse;
mod plan;
