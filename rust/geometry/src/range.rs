// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Condensed listing of ID sets, e.g. `1-4, 7, 9-10`.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::error::{Error, Result};

/// Renders IDs as comma-separated runs.
///
/// IDs are deduplicated and sorted. A run of two or more consecutive IDs is
/// written as `start-end`, a lone ID as itself.
pub fn condensed_ranges<I>(ids: I) -> Result<String>
where
    I: IntoIterator<Item = i32>,
{
    let sorted: BTreeSet<i32> = ids.into_iter().collect();
    let mut iter = sorted.into_iter();
    let first = iter.next().ok_or(Error::EmptyIdSet)?;

    let mut runs = vec![(first, first)];
    for id in iter {
        match runs.last_mut() {
            Some((_, end)) if i64::from(id) == i64::from(*end) + 1 => *end = id,
            _ => runs.push((id, id)),
        }
    }

    let mut out = String::new();
    for (i, (start, end)) in runs.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing to a String cannot fail
        let _ = if start == end {
            write!(out, "{start}")
        } else {
            write!(out, "{start}-{end}")
        };
    }
    Ok(out)
}
