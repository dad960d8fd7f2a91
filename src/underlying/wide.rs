use super::Wide;

macro_rules! impl_common {
  ($wide:ty, $narrow:ty) => {
    impl Wide for $wide {
      type Narrow = $narrow;

      #[inline]
      fn components_hi_lo(self) -> ($narrow, $narrow) {
        let hi = (self >> <$narrow>::BITS) as $narrow;
        let lo = self as $narrow;
        (hi, lo)
      }
    }
  };
}

impl_common!{u16, u8}
impl_common!{u32, u16}
impl_common!{u64, u32}
impl_common!{u128, u64}
