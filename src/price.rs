// Exact decimal amounts for the beverage menu.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative decimal amount stored as `minor` units at `scale` decimal
/// places, e.g. `Price::new(199, 2)` is 1.99 and `Price::new(11, 1)` is 1.1.
///
/// Addition keeps the larger scale of its operands, so 1.1 + 0.35 renders as
/// `1.45` while 1.1 on its own still renders as `1.1`. Scales run from 0 to
/// [`Price::MAX_SCALE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Price {
    minor: u64,
    scale: u32,
}

impl Price {
    pub const ZERO: Price = Price::new(0, 0);

    /// Largest supported scale; `10^MAX_SCALE` still fits in a `u64`.
    pub const MAX_SCALE: u32 = 18;

    /// # Panics
    /// Panics if `scale` exceeds [`Price::MAX_SCALE`]. In a const context this
    /// is a compile error.
    pub const fn new(minor: u64, scale: u32) -> Self {
        assert!(scale <= Self::MAX_SCALE, "price scale exceeds Price::MAX_SCALE");
        Self { minor, scale }
    }

    pub const fn try_new(minor: u64, scale: u32) -> Option<Self> {
        if scale > Self::MAX_SCALE {
            return None;
        }
        Some(Self { minor, scale })
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Sum of two prices, or `None` if the aligned amount does not fit.
    pub fn checked_add(self, rhs: Price) -> Option<Price> {
        let (lhs, rhs, scale) = self.aligned(rhs);
        let minor = u64::try_from(lhs.checked_add(rhs)?).ok()?;
        Some(Price { minor, scale })
    }

    // At most u64::MAX * 10^18, which fits in a u128.
    fn rescaled(self, scale: u32) -> u128 {
        debug_assert!(scale >= self.scale);
        u128::from(self.minor) * 10u128.pow(scale - self.scale)
    }

    fn aligned(self, other: Price) -> (u128, u128, u32) {
        let scale = self.scale.max(other.scale);
        (self.rescaled(scale), other.rescaled(scale), scale)
    }
}

impl Add for Price {
    type Output = Price;

    /// # Panics
    /// Panics if the sum overflows; use [`Price::checked_add`] to handle that.
    fn add(self, rhs: Price) -> Price {
        match self.checked_add(rhs) {
            Some(sum) => sum,
            None => panic!("price addition overflowed"),
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs, _) = self.aligned(*other);
        lhs == rhs
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs, _) = self.aligned(*other);
        lhs.cmp(&rhs)
    }
}

// Always '.' as the separator, never locale-dependent.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.minor);
        }
        let unit = 10u64.pow(self.scale);
        write!(
            f,
            "{}.{:0width$}",
            self.minor / unit,
            self.minor % unit,
            width = self.scale as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_keeps_scale() {
        assert_eq!(Price::new(199, 2).to_string(), "1.99");
        assert_eq!(Price::new(11, 1).to_string(), "1.1");
        assert_eq!(Price::new(89, 2).to_string(), "0.89");
        assert_eq!(Price::new(7, 2).to_string(), "0.07");
        assert_eq!(Price::new(3, 0).to_string(), "3");
    }

    #[test]
    fn test_add_aligns_scale() {
        let total = Price::new(11, 1) + Price::new(35, 2);
        assert_eq!(total.to_string(), "1.45");

        let total = Price::new(11, 1) + Price::new(15, 2) + Price::new(35, 2);
        assert_eq!(total.to_string(), "1.60");
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(Price::new(110, 2), Price::new(11, 1));
        assert!(Price::new(199, 2) > Price::new(11, 1));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(199, 2), Price::new(35, 2), Price::new(15, 2)]
            .into_iter()
            .sum();
        assert_eq!(total.to_string(), "2.49");
    }

    #[test]
    fn test_max_scale_boundary() {
        let tiny = Price::new(1, Price::MAX_SCALE);
        assert_eq!(tiny.to_string(), "0.000000000000000001");
        assert_eq!(
            (tiny + Price::new(1, 0)).to_string(),
            "1.000000000000000001"
        );
        assert_eq!(Price::try_new(1, Price::MAX_SCALE + 1), None);
        assert_eq!(Price::try_new(1, Price::MAX_SCALE), Some(tiny));
    }

    #[test]
    #[should_panic(expected = "price scale exceeds Price::MAX_SCALE")]
    fn test_scale_above_max_panics() {
        let _ = Price::new(1, 20);
    }

    #[test]
    fn test_large_amounts_compare_without_overflow() {
        let whole = Price::new(u64::MAX, 0);
        let fine = Price::new(u64::MAX, Price::MAX_SCALE);
        assert!(whole > fine);
        assert_ne!(whole, fine);
        assert_eq!(whole.checked_add(fine), None);
    }

    #[test]
    fn test_checked_add_overflow() {
        assert_eq!(Price::new(u64::MAX, 2).checked_add(Price::new(1, 2)), None);
        assert_eq!(
            Price::new(u64::MAX - 1, 2).checked_add(Price::new(1, 2)),
            Some(Price::new(u64::MAX, 2))
        );
    }

    prop_compose! {
        fn price()(minor in 0u64..1_000_000, scale in 0u32..4) -> Price {
            Price::new(minor, scale)
        }
    }

    proptest! {
        #[test]
        fn test_add_is_commutative(a in price(), b in price()) {
            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!((a + b).to_string(), (b + a).to_string());
        }

        #[test]
        fn test_add_is_associative(a in price(), b in price(), c in price()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }
    }
}
