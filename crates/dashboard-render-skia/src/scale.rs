// File: crates/dashboard-render-skia/src/scale.rs
// Summary: Date (X) and value (Y) transforms from chart coordinates to pixels.

use chrono::NaiveDate;

/// Horizontal scale over calendar days; shared by every row.
#[derive(Clone, Copy, Debug)]
pub struct DateScale {
    pub left_px: f32,
    pub right_px: f32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateScale {
    pub fn new(left_px: f32, right_px: f32, start: NaiveDate, end: NaiveDate) -> Self {
        Self { left_px, right_px, start, end }
    }

    fn span_days(&self) -> f32 {
        ((self.end - self.start).num_days() as f32).max(1.0)
    }

    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f32 {
        let x = (d - self.start).num_days() as f32;
        self.left_px + x / self.span_days() * (self.right_px - self.left_px)
    }

    /// Pixel width of one day, used to size candle bodies and bars.
    pub fn day_px(&self) -> f32 {
        (self.right_px - self.left_px) / (self.span_days() + 1.0)
    }

    pub fn date_at_fraction(&self, f: f64) -> NaiveDate {
        let days = ((self.end - self.start).num_days() as f64 * f).round() as i64;
        self.start + chrono::Duration::days(days)
    }
}

/// Vertical value scale mapping a data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate { NaiveDate::from_ymd_opt(2024, 1, day).unwrap() }

    #[test]
    fn date_scale_endpoints() {
        let s = DateScale::new(100.0, 500.0, d(1), d(11));
        assert_eq!(s.to_px(d(1)), 100.0);
        assert_eq!(s.to_px(d(11)), 500.0);
        assert_eq!(s.to_px(d(6)), 300.0);
        assert_eq!(s.date_at_fraction(0.5), d(6));
    }

    #[test]
    fn single_day_does_not_divide_by_zero() {
        let s = DateScale::new(0.0, 100.0, d(3), d(3));
        assert!(s.to_px(d(3)).is_finite());
        assert!(s.day_px() > 0.0);
    }

    #[test]
    fn value_scale_inverts_y() {
        let s = ValueScale::new(10.0, 110.0, 0.0, 50.0);
        assert_eq!(s.to_px(0.0), 110.0);
        assert_eq!(s.to_px(50.0), 10.0);
    }

    #[test]
    fn linspace_inclusive() {
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }
}
