//! Search menu: pick a predicate, browse what it selects, fold the result
//! back into the full collection.

use crate::core::browser::Browser;
use crate::core::criteria;
use crate::core::filter::{self, Criterion};
use crate::core::reconcile::reconcile;
use crate::errors::AppResult;
use crate::models::Record;
use crate::ui::Prompter;
use crate::ui::messages::banner;

pub struct SearchLogic;

impl SearchLogic {
    /// Run the search menu over `records` and return the updated collection.
    ///
    /// Cancelling a predicate prompt returns to this menu; Back returns the
    /// collection unchanged.
    pub fn run<P: Prompter>(
        p: &mut P,
        records: Vec<Record>,
        wrap_width: usize,
    ) -> AppResult<Vec<Record>> {
        loop {
            p.clear()?;
            p.show(&banner("Search Option Menu:"))?;
            p.show("[D]ate - Search for a specific date or a range of dates")?;
            p.show("[R]egex - Search for a specific Regex pattern")?;
            p.show("[S]tring - Search for a specific string keyword or phrase")?;
            p.show("[T]ime Spent - Search by the amount of time spent")?;

            let criterion = match p.choice("[B]ack to the main menu")? {
                Some('B') => return Ok(records),
                Some('D') => criteria::ask_date(p, &records)?,
                Some('R') => criteria::ask_pattern(p)?,
                Some('S') => criteria::ask_phrase(p)?,
                Some('T') => Some(criteria::ask_minutes(p)?),
                _ => {
                    p.notice("Please type D, R, S, T or B.")?;
                    continue;
                }
            };

            if let Some(criterion) = criterion {
                return Self::browse_matching(p, records, &criterion, wrap_width);
            }
        }
    }

    /// Browse the records selected by `criterion`, then reconcile.
    pub fn browse_matching<P: Prompter>(
        p: &mut P,
        records: Vec<Record>,
        criterion: &Criterion,
        wrap_width: usize,
    ) -> AppResult<Vec<Record>> {
        let subset: Vec<Record> = filter::apply(&records, criterion)
            .into_iter()
            .cloned()
            .collect();

        if subset.is_empty() {
            p.notice("There is nothing to display.")?;
            return Ok(records);
        }

        let outcome = Browser::new(subset).with_wrap_width(wrap_width).run(p)?;
        Ok(reconcile(records, &outcome.records, &outcome.deleted))
    }
}
