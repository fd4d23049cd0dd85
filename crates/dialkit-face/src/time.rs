/// Wall-clock time of day at minute resolution.
///
/// All angles are expressed in turns: `1.0` is a full circle, `0.0` points
/// to 12 o'clock, positive is clockwise.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

/// Hour-hand sub-steps per 12-hour cycle: 6 per hour, so the hand creeps
/// forward every 10 minutes instead of jumping on the hour.
pub(crate) const HOUR_STEPS: u32 = 72;

impl TimeOfDay {
    /// Out-of-range values wrap (hour mod 24, minute mod 60). The host is
    /// trusted, but wrapping keeps the angle math total.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }

    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// First minute of the 5-minute block the current minute falls in.
    #[inline]
    pub fn minute_block_start(self) -> u8 {
        (self.minute / 5) * 5
    }

    /// Minute hand angle in turns.
    #[inline]
    pub fn minute_angle(self) -> f32 {
        f32::from(self.minute) / 60.0
    }

    /// Quantized hour-hand position in `0..HOUR_STEPS`.
    #[inline]
    pub(crate) fn hour_step(self) -> u32 {
        u32::from(self.hour % 12) * 6 + u32::from(self.minute / 10)
    }

    /// Hour hand angle in turns; advances with the minutes, not just on the
    /// hour.
    #[inline]
    pub fn hour_angle(self) -> f32 {
        self.hour_step() as f32 / HOUR_STEPS as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_wraps_out_of_range() {
        let t = TimeOfDay::new(25, 61);
        assert_eq!(t.hour(), 1);
        assert_eq!(t.minute(), 1);
    }

    // ── minute block ──────────────────────────────────────────────────────

    #[test]
    fn minute_block_start_for_every_minute() {
        for minute in 0..60u8 {
            let t = TimeOfDay::new(0, minute);
            let block = t.minute_block_start();
            assert_eq!(block, 5 * (minute / 5));
            assert!(block <= minute && minute < block + 5);
        }
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn minute_angle_quarter_points() {
        assert_eq!(TimeOfDay::new(0, 0).minute_angle(), 0.0);
        assert_eq!(TimeOfDay::new(0, 15).minute_angle(), 0.25);
        assert_eq!(TimeOfDay::new(0, 30).minute_angle(), 0.5);
        assert_eq!(TimeOfDay::new(0, 45).minute_angle(), 0.75);
    }

    #[test]
    fn hour_angle_at_three_oclock() {
        // 3:00 → quarter turn, minute hand straight up.
        let t = TimeOfDay::new(3, 0);
        assert_eq!(t.hour_angle(), 0.25);
        assert_eq!(t.minute_angle(), 0.0);
    }

    #[test]
    fn hour_angle_at_half_past_six() {
        // 6:30 → step 6*6+3 = 39, 39/72 of a turn = 195°.
        let t = TimeOfDay::new(6, 30);
        assert_eq!(t.hour_step(), 39);
        assert_eq!(t.hour_angle(), 39.0 / 72.0);
        assert_eq!(t.minute_angle(), 0.5);
    }

    #[test]
    fn hour_hand_creeps_every_ten_minutes() {
        assert_eq!(TimeOfDay::new(6, 9).hour_step(), 36);
        assert_eq!(TimeOfDay::new(6, 10).hour_step(), 37);
        assert_eq!(TimeOfDay::new(6, 59).hour_step(), 41);
        assert_eq!(TimeOfDay::new(7, 0).hour_step(), 42);
    }

    #[test]
    fn hour_angle_monotone_over_twelve_hours() {
        let mut last = -1.0f32;
        for hour in 0..12u8 {
            for minute in 0..60u8 {
                let angle = TimeOfDay::new(hour, minute).hour_angle();
                assert!(angle >= last, "regressed at {hour:02}:{minute:02}");
                last = angle;
            }
        }
    }

    #[test]
    fn afternoon_matches_morning() {
        assert_eq!(
            TimeOfDay::new(15, 20).hour_angle(),
            TimeOfDay::new(3, 20).hour_angle()
        );
    }
}
