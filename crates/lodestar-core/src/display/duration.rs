//! Human-readable duration formatting.

use std::fmt;

use crate::profile::WEEKS_PER_MONTH;

/// Newtype formatting a week count as a human-readable duration.
///
/// Short spans stay in weeks; anything from a month up is shown as an
/// approximate month count.
///
/// # Examples
///
/// ```rust
/// use lodestar_core::display::WeekSpan;
///
/// assert_eq!(WeekSpan(1).to_string(), "1 week");
/// assert_eq!(WeekSpan(3).to_string(), "3 weeks");
/// assert_eq!(WeekSpan(13).to_string(), "~3 months");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSpan(pub u32);

impl fmt::Display for WeekSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weeks = self.0;
        if weeks < 4 {
            write!(f, "{weeks} week{}", if weeks == 1 { "" } else { "s" })
        } else {
            let months = (f64::from(weeks) / WEEKS_PER_MONTH).round() as u32;
            write!(f, "~{months} month{}", if months == 1 { "" } else { "s" })
        }
    }
}
