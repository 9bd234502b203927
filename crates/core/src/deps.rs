// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves "blocks" declarations into links between created tickets.

use std::collections::HashSet;

use crate::link::{KeyMapping, LinkRecord};
use crate::ticket::TicketRecord;

/// Derives the deduplicated set of links to create.
///
/// A ticket's `blocks` entries yield `ticket → target` and its `blocked_by`
/// entries yield `target → ticket`. Both ends must be present in `mapping`;
/// edges touching an unmapped ticket are dropped, since that ticket was
/// never created. When the same external pair is declared more than once
/// (typically once from each side), the first declaration wins. Output is in
/// order of first declaration.
pub fn extract_links(records: &[TicketRecord], mapping: &KeyMapping) -> Vec<LinkRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut links = Vec::new();

    for record in records {
        if !mapping.contains_key(&record.key) {
            tracing::debug!(key = %record.key, "ticket has no external key, skipping its links");
            continue;
        }
        let outgoing = record
            .blocks
            .iter()
            .map(|target| (record.key.as_str(), target.as_str()));
        let incoming = record
            .blocked_by
            .iter()
            .map(|source| (source.as_str(), record.key.as_str()));

        for (blocker, blocked) in outgoing.chain(incoming) {
            let (Some(blocker_external), Some(blocked_external)) =
                (mapping.get(blocker), mapping.get(blocked))
            else {
                tracing::debug!(blocker, blocked, "link target was not created, dropping link");
                continue;
            };
            let link = LinkRecord {
                blocker_logical: blocker.to_string(),
                blocker_external: blocker_external.clone(),
                blocked_logical: blocked.to_string(),
                blocked_external: blocked_external.clone(),
            };
            let (from, to) = link.external_pair();
            if seen.insert((from.to_string(), to.to_string())) {
                links.push(link);
            }
        }
    }

    links
}

#[cfg(test)]
#[path = "deps_tests.rs"]
mod tests;
