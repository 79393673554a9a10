//! Folding a browsed subsequence back into the full collection.

use crate::models::{Record, RecordId};
use std::collections::{HashMap, HashSet};

/// Merge edits and deletions made on a filtered view into `master`.
///
/// Records whose id is in `deleted` are dropped, even if `edited` still holds
/// a version of them. Records present in `edited` get their mutable fields
/// overwritten. Everything else is left untouched and in place.
pub fn reconcile(master: Vec<Record>, edited: &[Record], deleted: &[RecordId]) -> Vec<Record> {
    let deleted: HashSet<RecordId> = deleted.iter().copied().collect();
    let edits: HashMap<RecordId, &Record> = edited.iter().map(|r| (r.id, r)).collect();

    master
        .into_iter()
        .filter(|r| !deleted.contains(&r.id))
        .map(|mut r| {
            if let Some(e) = edits.get(&r.id) {
                r.overwrite_from(e);
            }
            r
        })
        .collect()
}

/// What a browsing session changed, by comparing the collection before and
/// after reconciliation.
#[derive(Debug, Default)]
pub struct Changes<'a> {
    /// New versions of records whose fields differ.
    pub edited: Vec<&'a Record>,
    /// Old versions of records no longer present.
    pub deleted: Vec<&'a Record>,
}

impl Changes<'_> {
    pub fn is_empty(&self) -> bool {
        self.edited.is_empty() && self.deleted.is_empty()
    }
}

pub fn changes<'a>(before: &'a [Record], after: &'a [Record]) -> Changes<'a> {
    let after_by_id: HashMap<RecordId, &Record> = after.iter().map(|r| (r.id, r)).collect();
    let mut out = Changes::default();

    for old in before {
        match after_by_id.get(&old.id) {
            None => out.deleted.push(old),
            Some(new) if *new != old => out.edited.push(new),
            Some(_) => {}
        }
    }

    out
}
