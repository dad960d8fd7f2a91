use super::{Word, Sealed};

macro_rules! impl_common {
  ($word:ty, $wide:ty) => {
    impl Word for $word {}
    impl Sealed for $word {
      type Wide = $wide;

      const ZERO: Self = 0;

      #[inline]
      fn add_wrapping(self, other: Self) -> Self { self.wrapping_add(other) }

      #[inline]
      fn sub_borrow(self, other: Self) -> (Self, bool) { self.overflowing_sub(other) }

      #[inline]
      fn mul_widening(self, other: Self) -> $wide {
        self as $wide * other as $wide
      }
    }
  }
}

impl_common!{u8, u16}
impl_common!{u16, u32}
impl_common!{u32, u64}
impl_common!{u64, u128}
