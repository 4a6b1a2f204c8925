//! Mock concierge call scheduling and the booking confirmation document.
//!
//! Slots are generated, not sourced from a real calendar; booking produces a
//! fixed-layout confirmation the candidate can download.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// Display format for offered slots, e.g. `"Mon 01 Sep, 03:30 PM"`.
pub const SLOT_FORMAT: &str = "%a %d %b, %I:%M %p";

const LEAD_TIME_HOURS: i64 = 2;
const SLOT_SPACING_MINUTES: i64 = 30;

/// Generate `count` formatted call slots starting two hours from `now` at
/// 30-minute intervals.
pub fn mock_timeslots(now: DateTime<Local>, count: usize) -> Vec<String> {
    let base = now + Duration::hours(LEAD_TIME_HOURS);
    (0..count)
        .map(|index| {
            (base + Duration::minutes(SLOT_SPACING_MINUTES * index as i64))
                .format(SLOT_FORMAT)
                .to_string()
        })
        .collect()
}

/// Convenience wrapper over [`mock_timeslots`] anchored at the current time.
pub fn upcoming_timeslots(count: usize) -> Vec<String> {
    mock_timeslots(Local::now(), count)
}

/// Booked concierge call, ready to render as a confirmation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallConfirmation {
    pub candidate_name: String,
    pub role_title: String,
    pub slot: String,
}

impl CallConfirmation {
    /// Fixed textual layout of the one-page confirmation: header, booking
    /// details, agenda copy, and a demo disclaimer footer.
    pub fn render_text(&self) -> String {
        format!(
            "Talent Concierge — Call Confirmation\n\
             \n\
             Candidate: {}\n\
             Role: {}\n\
             Scheduled Slot: {}\n\
             \n\
             Thank you for choosing a concierge call. This brief conversation will outline the role, \
             highlight your strengths, and answer any questions you have. You will receive the next \
             steps after the call.\n\
             \n\
             This confirmation is for demonstration purposes.\n",
            self.candidate_name, self.role_title, self.slot
        )
    }
}
