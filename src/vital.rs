//! A bounded integer which is always clamped between zero and a fixed maximum.
//!
//! [`VitalValue`] is a plain copyable value and is a typical element of a
//! [`Queue`](crate::Queue).

use crate::{Error, Result,};
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign,},
};

/// A value in `0..=max`.
///
/// Comparisons only consider the current value, not the maximum.
///
/// Scalars can be added on either side (`value + 5`, `5 + value`) but only subtracted on
/// the right (`value - 5`); there is no `i32 - VitalValue`.
#[derive(Clone, Copy, Debug,)]
pub struct VitalValue {
    points: i32,
    max: i32,
}

impl VitalValue {
    /// The maximum of a [`VitalValue`] created with [`Default`].
    pub const DEFAULT_MAX: i32 = 100;

    /// Returns a new [`VitalValue`] which starts full.
    ///
    /// # Params
    ///
    /// max --- The maximum of the value.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] if `max` is not positive.
    pub fn new(max: i32,) -> Result<Self,> {
        if max <= 0 { return Err(Error::InvalidArgument { max, }) }

        Ok(Self { points: max, max, })
    }
    /// Returns the current value.
    #[inline]
    pub const fn points(self,) -> i32 { self.points }
    /// Returns the maximum.
    #[inline]
    pub const fn max(self,) -> i32 { self.max }
}

impl Default for VitalValue {
    #[inline]
    fn default() -> Self { Self { points: Self::DEFAULT_MAX, max: Self::DEFAULT_MAX, } }
}

impl SubAssign<i32,> for VitalValue {
    fn sub_assign(&mut self, points: i32,) {
        //Widen so `i32::MIN` cannot overflow.
        let points = i64::from(self.points,) - i64::from(points,);

        self.points = points.clamp(0, i64::from(self.max,),) as i32;
    }
}

impl AddAssign<i32,> for VitalValue {
    fn add_assign(&mut self, points: i32,) {
        let points = i64::from(self.points,) + i64::from(points,);

        self.points = points.clamp(0, i64::from(self.max,),) as i32;
    }
}

impl Add<i32,> for VitalValue {
    type Output = Self;

    #[inline]
    fn add(mut self, points: i32,) -> Self::Output { self += points; self }
}

impl Add<VitalValue,> for i32 {
    type Output = VitalValue;

    #[inline]
    fn add(self, value: VitalValue,) -> Self::Output { value + self }
}

impl Sub<i32,> for VitalValue {
    type Output = Self;

    #[inline]
    fn sub(mut self, points: i32,) -> Self::Output { self -= points; self }
}

impl PartialEq for VitalValue {
    #[inline]
    fn eq(&self, rhs: &Self) -> bool { self.points == rhs.points }
}

impl Eq for VitalValue {}

impl PartialOrd for VitalValue {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering,> { Some(self.cmp(rhs,)) }
}

impl Ord for VitalValue {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering { self.points.cmp(&rhs.points,) }
}

impl fmt::Display for VitalValue {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        write!(fmt, "{}({})", self.points, self.max,)
    }
}
