use super::{whole_days_between, CustodyOwner, ScheduleConfig};
use time::Date;

const DAYS_IN_WEEK: i64 = 7;

/// Returns which parent has the children on `date`, or `None` if the date
/// precedes the custody schedule.
///
/// Custody alternates every seven days starting from the anchor, which
/// belongs to the primary parent.  The weekday of the anchor therefore
/// determines the handoff day; no weekday check is made here.
pub(crate) fn custody_for(config: &ScheduleConfig, date: Date) -> Option<CustodyOwner> {
    if date < config.custody_anchor {
        return None;
    }
    let week_index = whole_days_between(config.custody_anchor, date) / DAYS_IN_WEEK;
    Some(if week_index % 2 == 0 {
        CustodyOwner::PrimaryParent
    } else {
        CustodyOwner::OtherParent
    })
}
