//! Day bookkeeping shared by the tour search and the trip summary.

/// Day index and distance already driven on that day.
///
/// A leg that would bring the day's distance to or past the cap is driven
/// the next day instead: the day index advances and the leg becomes the
/// whole of the new day's distance.
///
/// # Examples
///
/// ```
/// use u_roadtrip::search::DayClock;
///
/// let clock = DayClock::default().drive(100.0, 250.0);
/// assert_eq!((clock.day, clock.today), (0, 100.0));
///
/// // 100 + 150 reaches the cap exactly, so the leg moves to tomorrow
/// let clock = clock.drive(150.0, 250.0);
/// assert_eq!((clock.day, clock.today), (1, 150.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayClock {
    /// Zero-based day index.
    pub day: usize,
    /// Distance driven so far on the current day.
    pub today: f64,
}

impl DayClock {
    /// Returns the clock after driving a leg of `distance`.
    pub fn drive(self, distance: f64, distance_cap: f64) -> Self {
        if self.today + distance >= distance_cap {
            Self {
                day: self.day + 1,
                today: distance,
            }
        } else {
            Self {
                day: self.day,
                today: self.today + distance,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day() {
        let c = DayClock::default().drive(100.0, 400.0).drive(200.0, 400.0);
        assert_eq!(c, DayClock { day: 0, today: 300.0 });
    }

    #[test]
    fn test_rollover_at_cap() {
        let c = DayClock { day: 2, today: 300.0 }.drive(100.0, 400.0);
        assert_eq!(c, DayClock { day: 3, today: 100.0 });
    }

    #[test]
    fn test_leg_equal_to_cap() {
        // A full-cap leg always starts a new day, even from a fresh morning
        let c = DayClock::default().drive(400.0, 400.0);
        assert_eq!(c, DayClock { day: 1, today: 400.0 });
    }
}
