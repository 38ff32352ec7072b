use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::renderer::sink::VertexData;

/// Tipo numérico que puede guardar un `Point3`.
///
/// El conjunto es cerrado: enteros con y sin signo de 8 a 64 bits, `f32` y `f64`.
/// Cada tipo decide con `vertex` qué variante de `VertexData` envía al sumidero;
/// `i32`, `f32` e `i16` tienen entrada propia y el resto cae en doble precisión.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    fn to_f64(self) -> f64;

    /// Conversión desde f64; en los enteros trunca y satura como `as`.
    fn from_f64(value: f64) -> Self;

    /// Aritmética modular en enteros; en flotantes, los operadores normales.
    fn wrapping_add(self, other: Self) -> Self;
    fn wrapping_sub(self, other: Self) -> Self;
    fn wrapping_mul(self, other: Self) -> Self;
    fn wrapping_neg(self) -> Self;

    fn vertex(x: Self, y: Self, z: Self) -> VertexData {
        VertexData::Double(x.to_f64(), y.to_f64(), z.to_f64())
    }
}

macro_rules! scalar_ops {
    (int) => {
        #[inline]
        fn wrapping_add(self, other: Self) -> Self {
            self.wrapping_add(other)
        }

        #[inline]
        fn wrapping_sub(self, other: Self) -> Self {
            self.wrapping_sub(other)
        }

        #[inline]
        fn wrapping_mul(self, other: Self) -> Self {
            self.wrapping_mul(other)
        }

        #[inline]
        fn wrapping_neg(self) -> Self {
            self.wrapping_neg()
        }
    };
    (float) => {
        #[inline]
        fn wrapping_add(self, other: Self) -> Self {
            self + other
        }

        #[inline]
        fn wrapping_sub(self, other: Self) -> Self {
            self - other
        }

        #[inline]
        fn wrapping_mul(self, other: Self) -> Self {
            self * other
        }

        #[inline]
        fn wrapping_neg(self) -> Self {
            -self
        }
    };
}

macro_rules! impl_scalar {
    ($kind:ident: $($t:ty $(=> $variant:ident)?),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                scalar_ops!($kind);

                $(
                    #[inline]
                    fn vertex(x: Self, y: Self, z: Self) -> VertexData {
                        VertexData::$variant(x, y, z)
                    }
                )?
            }
        )*
    };
}

// i32, i16 y f32 tienen entrada propia en el sumidero; el resto va en doble precisión
impl_scalar!(int: i32 => Int, i16 => Short, i8, i64, u8, u16, u32, u64);
impl_scalar!(float: f32 => Float, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_from_f64_truncates() {
        assert_eq!(i32::from_f64(0.9), 0);
        assert_eq!(i32::from_f64(-1.7), -1);
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(i16::from_f64(f64::NAN), 0);
    }

    #[test]
    fn vertex_dispatch_by_kind() {
        assert_eq!(i32::vertex(1, 2, 3), VertexData::Int(1, 2, 3));
        assert_eq!(f32::vertex(1.0, 2.0, 3.0), VertexData::Float(1.0, 2.0, 3.0));
        assert_eq!(i16::vertex(1, 2, 3), VertexData::Short(1, 2, 3));
        assert_eq!(f64::vertex(1.5, 2.0, 3.0), VertexData::Double(1.5, 2.0, 3.0));
        assert_eq!(u8::vertex(1, 2, 3), VertexData::Double(1.0, 2.0, 3.0));
        assert_eq!(i64::vertex(-4, 0, 9), VertexData::Double(-4.0, 0.0, 9.0));
    }

    #[test]
    fn integer_ops_wrap_at_the_limits() {
        assert_eq!(Scalar::wrapping_add(i16::MAX, 1), i16::MIN);
        assert_eq!(Scalar::wrapping_sub(i8::MIN, 1), i8::MAX);
        assert_eq!(Scalar::wrapping_mul(200u8, 2), 144);
        assert_eq!(Scalar::wrapping_neg(i16::MIN), i16::MIN);
    }

    #[test]
    fn float_ops_are_plain() {
        assert_eq!(Scalar::wrapping_add(f32::MAX, f32::MAX), f32::INFINITY);
        assert_eq!(Scalar::wrapping_mul(1.5f64, 2.0), 3.0);
        assert_eq!(Scalar::wrapping_neg(2.0f32), -2.0);
    }
}
