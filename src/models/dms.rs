use serde::{Deserialize, Serialize};

use crate::utils::constants::SECONDS_ROLLOVER;

/// Which coordinate axis a value belongs to, for compass letter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// One decimal-degree value decomposed into degrees, minutes and seconds.
///
/// The hemisphere sign is carried separately from the degree magnitude so
/// that values between -1 and 0 keep their direction. Displayed minutes
/// are always in [0, 59] and seconds in [0, 60).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DmsCoordinate {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub negative: bool,
}

impl DmsCoordinate {
    /// Decompose a decimal-degree value into DMS components.
    ///
    /// Works in total seconds to avoid accumulating error across the
    /// minute and second subdivisions, then applies two rollover rules:
    /// seconds that would display as "60.00" at two decimal places roll
    /// into the next minute, and a sixtieth minute rolls into the next
    /// degree.
    ///
    /// # Examples
    /// ```
    /// use coord_processor::models::DmsCoordinate;
    ///
    /// let dms = DmsCoordinate::from_decimal_degrees(50.504167);
    /// assert_eq!((dms.degrees, dms.minutes), (50, 30));
    /// assert!((dms.seconds - 15.0).abs() < 0.01);
    /// ```
    pub fn from_decimal_degrees(dd: f64) -> Self {
        let negative = dd < 0.0;
        let total_seconds = dd.abs() * 3600.0;

        let mut degrees = (total_seconds / 3600.0).floor() as u32;
        let rem = total_seconds - f64::from(degrees) * 3600.0;
        let mut minutes = (rem / 60.0).floor() as u32;
        let mut seconds = rem - f64::from(minutes) * 60.0;

        // Rollover must run seconds-first: bumping the minute here can
        // push minutes to 60, which the second rule then absorbs.
        if seconds >= SECONDS_ROLLOVER {
            seconds = 0.0;
            minutes += 1;
        }
        if minutes == 60 {
            minutes = 0;
            degrees += 1;
        }

        Self {
            degrees,
            minutes,
            seconds,
            negative,
        }
    }

    /// Degrees with the hemisphere sign applied
    pub fn signed_degrees(&self) -> i32 {
        if self.negative {
            -(self.degrees as i32)
        } else {
            self.degrees as i32
        }
    }

    /// Recompose the decimal-degree value
    pub fn to_decimal_degrees(&self) -> f64 {
        let magnitude =
            f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Render as `D°MM'SS.SS" X` with the compass letter for `axis`
    pub fn format(&self, axis: Axis) -> String {
        let direction = match axis {
            Axis::Latitude => {
                if self.negative {
                    'S'
                } else {
                    'N'
                }
            }
            Axis::Longitude => {
                if self.negative {
                    'W'
                } else {
                    'E'
                }
            }
        };
        format!(
            "{}°{:02}'{:05.2}\" {}",
            self.degrees, self.minutes, self.seconds, direction
        )
    }
}
