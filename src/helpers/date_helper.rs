use chrono::{Local, NaiveDate};
use crate::config::constants::MILLIS_PER_DAY;

pub struct DateHelper;

impl DateHelper {
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Whole days from `start` to `end`, rounded up; negative when `end` is first.
    pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
        let millis = (end - start).num_milliseconds();
        // ceiling division that also holds for negative spans
        let days = millis / MILLIS_PER_DAY;
        if millis % MILLIS_PER_DAY > 0 { days + 1 } else { days }
    }
}
