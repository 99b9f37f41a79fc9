//! Value types from optional third-party crates.

use crate::DeepCopy;

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::{
        DateTime, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
        Utc, Weekday,
    };

    use super::DeepCopy;

    impl<Tz: TimeZone> DeepCopy for DateTime<Tz> {
        fn deep_copy(&self) -> Self {
            self.clone()
        }
    }

    macro_rules! impl_chrono {
        ($($t:ty),*) => {
            $(
                impl DeepCopy for $t {
                    #[inline]
                    fn deep_copy(&self) -> Self {
                        *self
                    }
                }
            )*
        };
    }

    impl_chrono!(
        NaiveDate,
        NaiveTime,
        NaiveDateTime,
        TimeDelta,
        Utc,
        FixedOffset,
        Month,
        Weekday
    );
}

#[cfg(feature = "uuid")]
impl DeepCopy for uuid::Uuid {
    #[inline]
    fn deep_copy(&self) -> Self {
        *self
    }
}

#[cfg(feature = "url")]
impl DeepCopy for url::Url {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}
