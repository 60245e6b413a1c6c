//! Truthiness of predicate results and elements.
//!
//! Predicates in this library may return any [`Truthy`] value, not only
//! `bool`. The falsy values are `false`, numeric zero, `NaN`, the empty
//! string, and `None`; everything else is truthy. With the `json` feature,
//! `serde_json::Value::Null` is falsy as well.

/// A value that can be tested for truthiness.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0_u8.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some("x").is_truthy());
/// assert!(!Some(0_i64).is_truthy());
/// assert!(None::<bool>.is_falsy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value is truthy.
    fn is_truthy(&self) -> bool;

    /// Returns `true` if the value is falsy.
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! integer_truthy {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

integer_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_truthy {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

float_truthy!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
