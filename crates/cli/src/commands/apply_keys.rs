// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tix_core::{KeyMapping, SourceFormat};

use crate::cli::{InputArgs, MappingArgs};
use crate::error::{Error, Result};

use super::{read_input, read_mapping};

pub fn run(input: &InputArgs, mapping: &MappingArgs, write: bool) -> Result<()> {
    if write && input.is_stdin() {
        return Err(Error::WriteToStdin);
    }
    let text = read_input(&input.file)?;
    let mapping = read_mapping(&mapping.mapping)?;
    let annotated = annotate(&text, &mapping, input.source_format())?;

    if write {
        if annotated == text {
            println!("{} is up to date", input.file);
        } else {
            std::fs::write(&input.file, &annotated)?;
            println!("Updated {}", input.file);
        }
        return Ok(());
    }
    run_impl(&annotated, &mut std::io::stdout().lock())
}

/// Annotates `text` with the keys in `mapping`.
pub(crate) fn annotate(text: &str, mapping: &KeyMapping, format: SourceFormat) -> Result<String> {
    Ok(format.apply_keys(text, mapping)?)
}

/// Writes the annotated document unchanged.
pub(crate) fn run_impl(annotated: &str, out: &mut impl Write) -> Result<()> {
    out.write_all(annotated.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "apply_keys_tests.rs"]
mod tests;
