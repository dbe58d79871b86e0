/// Corner radius as a percentage of the view width, clamped to `0..=100`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CornerPercent(u8);

impl CornerPercent {
    pub const MIN: CornerPercent = CornerPercent(0);
    pub const MAX: CornerPercent = CornerPercent(100);

    /// Clamps `value` into range. Out-of-range input is logged, not rejected.
    pub fn new(value: i32) -> Self {
        let clamped = value.clamp(0, 100);
        if clamped != value {
            log::debug!("corner percent {value} clamped to {clamped}");
        }
        Self(clamped as u8)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// `width × percent / 100`, the radius every strategy derives.
    #[inline]
    pub fn radius_for(self, width: u32) -> f32 {
        width as f32 * self.0 as f32 / 100.0
    }

    /// Moves by `delta` points, staying in range.
    #[inline]
    pub fn step(self, delta: i32) -> Self {
        Self::new(self.0 as i32 + delta)
    }
}

impl From<u8> for CornerPercent {
    fn from(value: u8) -> Self {
        Self::new(value as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(CornerPercent::new(-5), CornerPercent::MIN);
        assert_eq!(CornerPercent::new(250), CornerPercent::MAX);
        assert_eq!(CornerPercent::from(200u8).get(), 100);
        assert_eq!(CornerPercent::new(42).get(), 42);
    }

    #[test]
    fn radius_is_fraction_of_width() {
        assert_eq!(CornerPercent::new(20).radius_for(200), 40.0);
        assert_eq!(CornerPercent::new(100).radius_for(200), 200.0);
        assert_eq!(CornerPercent::new(0).radius_for(200), 0.0);
        assert_eq!(CornerPercent::new(33).radius_for(0), 0.0);
    }

    #[test]
    fn step_saturates() {
        assert_eq!(CornerPercent::new(98).step(5), CornerPercent::MAX);
        assert_eq!(CornerPercent::new(2).step(-5), CornerPercent::MIN);
    }
}
