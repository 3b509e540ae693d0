// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Assembly of mutation fragments into a single document

use log::debug;

/// Name of the synthetic operation wrapping bare fragments
pub const WRAPPER_OPERATION: &str = "m";

/// Leading text of an already wrapped document
pub const WRAPPER_PREFIX: &str = "mutation m";

/// Build one document from an ordered list of fragments
///
/// When the fragments (trimmed) already start with [`WRAPPER_PREFIX`] the
/// text is passed through unchanged; each fragment is then expected to be a
/// complete `mutation m { ... }` operation, and the joined text is a document
/// with one such operation per fragment. Otherwise the fragments are joined with newlines, in order, and
/// wrapped in `mutation m { ... }` so each one becomes a sibling top-level
/// field. Fragments are not validated here.
pub fn assemble_document<S: AsRef<str>>(fragments: &[S]) -> String {
    let joined = fragments
        .iter()
        .map(|fragment| fragment.as_ref())
        .collect::<Vec<_>>()
        .join("\n");

    if joined.trim().starts_with(WRAPPER_PREFIX) {
        debug!(
            "Passing through {} pre-wrapped fragment(s)",
            fragments.len()
        );
        return joined;
    }

    let document = format!("{} {{\n{}\n}}", WRAPPER_PREFIX, joined);
    debug!(
        "Wrapped {} fragment(s) into a {}-byte document",
        fragments.len(),
        document.len()
    );
    document
}
