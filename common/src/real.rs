//! Numeric operations used by the kernels, implemented for a single `f64` and for fixed-width lanes of them.
//!
//! Everything in [`crate::kernel`] and [`crate::coords::normalize`] is written once against [`Real`], so the
//! scalar calls and the batch layer share the exact same arithmetic.
use std::array;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Width of the lanes used by the batch paths.
pub const LANES: usize = 4;

/// The lane type used by the batch paths.
pub type Batch = Lanes<LANES>;

/// A value, or a group of values, supporting the math the kernels need.
pub trait Real:
    Copy
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Per-element result of a comparison.
    type Mask: Copy;
    /// Number of `f64`s this holds.
    const WIDTH: usize;

    fn splat(value: f64) -> Self;
    /// Read the first `WIDTH` values from `src`.
    fn load(src: &[f64]) -> Self;
    /// Write into the first `WIDTH` slots of `dst`.
    fn store(self, dst: &mut [f64]);

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
    fn asin(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sqrt(self) -> Self;
    fn to_radians(self) -> Self;
    fn to_degrees(self) -> Self;
    fn clamp(self, min: f64, max: f64) -> Self;
    /// Remainder with the sign of `rhs`, so for a positive `rhs` the result is in `[0, rhs)`.
    fn rem_euclid(self, rhs: f64) -> Self;

    fn gt(self, rhs: f64) -> Self::Mask;
    fn ge(self, rhs: f64) -> Self::Mask;
    /// Pick from `if_true` where `mask` is set, from `if_false` elsewhere.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;
}

impl Real for f64 {
    type Mask = bool;
    const WIDTH: usize = 1;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        value
    }
    #[inline(always)]
    fn load(src: &[f64]) -> Self {
        src[0]
    }
    #[inline(always)]
    fn store(self, dst: &mut [f64]) {
        dst[0] = self;
    }
    #[inline(always)]
    fn sin(self) -> Self {
        f64::sin(self)
    }
    #[inline(always)]
    fn cos(self) -> Self {
        f64::cos(self)
    }
    #[inline(always)]
    fn asin(self) -> Self {
        f64::asin(self)
    }
    #[inline(always)]
    fn atan2(self, other: Self) -> Self {
        f64::atan2(self, other)
    }
    #[inline(always)]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
    #[inline(always)]
    fn to_radians(self) -> Self {
        f64::to_radians(self)
    }
    #[inline(always)]
    fn to_degrees(self) -> Self {
        f64::to_degrees(self)
    }
    #[inline(always)]
    fn clamp(self, min: f64, max: f64) -> Self {
        f64::clamp(self, min, max)
    }
    #[inline(always)]
    fn rem_euclid(self, rhs: f64) -> Self {
        f64::rem_euclid(self, rhs)
    }
    #[inline(always)]
    fn gt(self, rhs: f64) -> bool {
        self > rhs
    }
    #[inline(always)]
    fn ge(self, rhs: f64) -> bool {
        self >= rhs
    }
    #[inline(always)]
    fn select(mask: bool, if_true: Self, if_false: Self) -> Self {
        if mask {
            if_true
        } else {
            if_false
        }
    }
}

/// `N` values operated on element-wise. Kept as a plain array so the optimizer is free to vectorize it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Lanes<const N: usize>(pub [f64; N]);
impl<const N: usize> Lanes<N> {
    #[inline(always)]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }
    #[inline(always)]
    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self(array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}
impl<const N: usize> From<[f64; N]> for Lanes<N> {
    fn from(value: [f64; N]) -> Self {
        Self(value)
    }
}

macro_rules! lane_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<const N: usize> $trait for Lanes<N> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }
    };
}
lane_op!(Add, add, +);
lane_op!(Sub, sub, -);
lane_op!(Mul, mul, *);
lane_op!(Div, div, /);

impl<const N: usize> Neg for Lanes<N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<const N: usize> Real for Lanes<N> {
    type Mask = [bool; N];
    const WIDTH: usize = N;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self([value; N])
    }
    #[inline(always)]
    fn load(src: &[f64]) -> Self {
        Self(array::from_fn(|i| src[i]))
    }
    #[inline(always)]
    fn store(self, dst: &mut [f64]) {
        dst[..N].copy_from_slice(&self.0);
    }
    #[inline(always)]
    fn sin(self) -> Self {
        self.map(f64::sin)
    }
    #[inline(always)]
    fn cos(self) -> Self {
        self.map(f64::cos)
    }
    #[inline(always)]
    fn asin(self) -> Self {
        self.map(f64::asin)
    }
    #[inline(always)]
    fn atan2(self, other: Self) -> Self {
        self.zip_with(other, f64::atan2)
    }
    #[inline(always)]
    fn sqrt(self) -> Self {
        self.map(f64::sqrt)
    }
    #[inline(always)]
    fn to_radians(self) -> Self {
        self.map(f64::to_radians)
    }
    #[inline(always)]
    fn to_degrees(self) -> Self {
        self.map(f64::to_degrees)
    }
    #[inline(always)]
    fn clamp(self, min: f64, max: f64) -> Self {
        self.map(|x| x.clamp(min, max))
    }
    #[inline(always)]
    fn rem_euclid(self, rhs: f64) -> Self {
        self.map(|x| x.rem_euclid(rhs))
    }
    #[inline(always)]
    fn gt(self, rhs: f64) -> [bool; N] {
        self.0.map(|x| x > rhs)
    }
    #[inline(always)]
    fn ge(self, rhs: f64) -> [bool; N] {
        self.0.map(|x| x >= rhs)
    }
    #[inline(always)]
    fn select(mask: [bool; N], if_true: Self, if_false: Self) -> Self {
        Self(array::from_fn(|i| {
            if mask[i] {
                if_true.0[i]
            } else {
                if_false.0[i]
            }
        }))
    }
}
