use chrono::Timelike;

use crate::clock::SystemClock;
use crate::clock::TimeSource;
use crate::parse;
use crate::TimeError;

const MINUTES_PER_HOUR: i64 = 60;

/// A time of day with hour and minute parts.
///
/// Minutes are always in `0..=59`; any excess is carried into
/// the hour part when the value is built. Hours have no upper
/// bound, so `26:05` is a valid value meaning "five past two,
/// on the following day".
///
/// A `Time` is ordered by its total minute count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, std::hash::Hash, PartialOrd, Ord)]
pub struct Time {
    hours: i64,
    minutes: i64,
}

impl Time {
    /// `00:00`
    pub const MIDNIGHT: Time = Time {
        hours: 0,
        minutes: 0,
    };

    /// Create a new Time from raw components.
    ///
    /// Minutes beyond 59 are folded into whole hours.
    ///
    /// # Errors
    ///
    /// [`TimeError::InvalidInput`] if either component is negative,
    /// or if the total minute count does not fit in an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// let t = workingday_core::Time::new(5, 256).unwrap();
    /// assert_eq!(t.hours(), 9);
    /// assert_eq!(t.minutes(), 16);
    /// assert!(workingday_core::Time::new(-1, 0).is_err());
    /// ```
    pub fn new(hours: i64, minutes: i64) -> Result<Self, TimeError> {
        if hours < 0 || minutes < 0 {
            return Err(TimeError::invalid(format!(
                "negative component in ({hours}, {minutes})"
            )));
        }
        let remainder = minutes % MINUTES_PER_HOUR;
        hours
            .checked_add(minutes / MINUTES_PER_HOUR)
            .filter(|h| {
                h.checked_mul(MINUTES_PER_HOUR)
                    .and_then(|total| total.checked_add(remainder))
                    .is_some()
            })
            .map(|hours| Self {
                hours,
                minutes: remainder,
            })
            .ok_or_else(|| {
                TimeError::invalid(format!("({hours}, {minutes}) overflows the minute count"))
            })
    }

    /// The current local wall-clock time.
    pub fn now() -> Self {
        Self::now_from(&SystemClock)
    }

    /// The current time as reported by `source`.
    ///
    /// ```
    /// use workingday_core::Time;
    /// let t = Time::now_from(&|| (7_u32, 45_u32));
    /// assert_eq!(t.to_string(), "07:45");
    /// ```
    pub fn now_from<S: TimeSource + ?Sized>(source: &S) -> Self {
        let (hour, minute) = source.hour_minute();
        Self::from_clock_fields(hour, minute)
    }

    /// Take the hour of day and minute of hour from a `chrono` value.
    ///
    /// ```
    /// let dt = chrono::NaiveDate::from_ymd_opt(2021, 3, 1)
    ///     .unwrap()
    ///     .and_hms_opt(15, 35, 12)
    ///     .unwrap();
    /// let t = workingday_core::Time::from_date_time(&dt);
    /// assert_eq!((t.hours(), t.minutes()), (15, 35));
    /// ```
    pub fn from_date_time<T: Timelike>(external_time: &T) -> Self {
        Self::from_clock_fields(external_time.hour(), external_time.minute())
    }

    /// Create a Time from a count of minutes.
    ///
    /// # Errors
    ///
    /// [`TimeError::InvalidInput`] if `total_minutes` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// let t = workingday_core::Time::from_integer(1440).unwrap();
    /// assert_eq!(t.hours(), 24);
    /// assert_eq!(t.minutes(), 0);
    /// assert_eq!(t.to_integer(), 1440);
    /// ```
    pub fn from_integer(total_minutes: i64) -> Result<Self, TimeError> {
        if total_minutes < 0 {
            return Err(TimeError::invalid(format!(
                "negative minute count {total_minutes}"
            )));
        }
        Ok(Self::from_non_negative(total_minutes))
    }

    /// Parse common human notations: `H:M`, `H:M:S` and `H AM`/`H PM`.
    ///
    /// Seconds are truncated. An `AM`/`PM` marker is accepted but
    /// does **not** shift the hour, so `"9 PM"` is `09:00`.
    ///
    /// ```
    /// use workingday_core::Time;
    /// assert_eq!(Time::from_loose_str("13:25:59").unwrap().to_string(), "13:25");
    /// assert_eq!(Time::from_loose_str("9 AM").unwrap().to_string(), "09:00");
    /// assert!(Time::from_loose_str("test").is_err());
    /// ```
    pub fn from_loose_str(text: &str) -> Result<Self, TimeError> {
        let (hours, minutes) = parse::loose(text)?;
        Self::new(hours, minutes)
    }

    /// Parse exactly `H:M`, both parts decimal digits.
    ///
    /// Minute overflow is folded as in [`Time::new`].
    ///
    /// ```
    /// use workingday_core::Time;
    /// let t = Time::from_strict_str("25:65").unwrap();
    /// assert_eq!((t.hours(), t.minutes()), (26, 5));
    /// assert!(Time::from_strict_str("13:b").is_err());
    /// ```
    pub fn from_strict_str(text: &str) -> Result<Self, TimeError> {
        let (hours, minutes) = parse::strict(text)?;
        Self::new(hours, minutes)
    }

    /// The hour part, never wrapped at 24.
    ///
    /// ```
    /// let t = workingday_core::Time::from_integer(26 * 60 + 5).unwrap();
    /// assert_eq!(t.hours(), 26);
    /// assert_eq!(t.minutes(), 5);
    /// ```
    pub fn hours(&self) -> i64 {
        self.hours
    }

    /// The minute part, always in `0..=59`.
    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Total minutes, `hours * 60 + minutes`.
    pub fn to_integer(&self) -> i64 {
        self.hours * MINUTES_PER_HOUR + self.minutes
    }

    // Clock fields are u32, so neither a negative value nor an
    // i64 overflow is possible.
    fn from_clock_fields(hour: u32, minute: u32) -> Self {
        let minutes = i64::from(minute);
        Self {
            hours: i64::from(hour) + minutes / MINUTES_PER_HOUR,
            minutes: minutes % MINUTES_PER_HOUR,
        }
    }

    pub(crate) fn from_non_negative(total_minutes: i64) -> Self {
        debug_assert!(total_minutes >= 0);
        Self {
            hours: total_minutes / MINUTES_PER_HOUR,
            minutes: total_minutes % MINUTES_PER_HOUR,
        }
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl std::str::FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_strict_str(s)
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl TryFrom<i64> for Time {
    type Error = TimeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_integer(value)
    }
}

impl From<Time> for i64 {
    fn from(value: Time) -> Self {
        value.to_integer()
    }
}

impl_total_minutes_conversions!(i32, u32, u64, usize);
