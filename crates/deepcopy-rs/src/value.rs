use std::{
    cmp::Ordering,
    ffi::{CString, OsString},
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, Wrapping,
    },
    path::PathBuf,
    time::{Duration, Instant, SystemTime},
};

use crate::DeepCopy;

// Types whose value is the whole of their state.
macro_rules! impl_by_copy {
    ($($t:ty),* $(,)?) => {
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

// Owned values without interior sharing; `Clone` already allocates fresh storage.
macro_rules! impl_by_clone {
    ($($t:ty),* $(,)?) => {
        $(
            impl DeepCopy for $t {
                #[inline]
                fn deep_copy(&self) -> Self {
                    ::core::clone::Clone::clone(self)
                }
            }
        )*
    };
}

impl_by_copy!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
);

impl_by_copy!(
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
);

impl_by_copy!(
    Ordering,
    Duration,
    Instant,
    SystemTime,
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    SocketAddrV4,
    SocketAddrV6,
);

impl_by_clone!(String, PathBuf, OsString, CString);

/// Shared `'static` data is immutable for the whole program, so the
/// reference itself is the value.
impl<T: ?Sized> DeepCopy for &'static T {
    #[inline]
    fn deep_copy(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> DeepCopy for PhantomData<T> {
    #[inline]
    fn deep_copy(&self) -> Self {
        PhantomData
    }
}

impl<T: DeepCopy> DeepCopy for Wrapping<T> {
    fn deep_copy(&self) -> Self {
        Wrapping(self.0.deep_copy())
    }
}
