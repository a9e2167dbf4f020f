// Operator boilerplate shared by the integer and float vector types.
//
// `impl_vec_ops!(Vec3, f32, 3, 0 => x, 1 => y, 2 => z)` generates:
// component-wise `+ - * /` between vectors, the same with a scalar on either
// side, negation, compound assignment, `Index`/`IndexMut` in field order and
// array conversions.

macro_rules! impl_vec_ops {
    ($V:ident, $T:ty, $N:literal, $($i:literal => $f:ident),+) => {
        impl core::ops::Add for $V {
            type Output = Self;
            #[inline] fn add(self, rhs: Self) -> Self { Self { $($f: self.$f + rhs.$f),+ } }
        }
        impl core::ops::Sub for $V {
            type Output = Self;
            #[inline] fn sub(self, rhs: Self) -> Self { Self { $($f: self.$f - rhs.$f),+ } }
        }
        impl core::ops::Mul for $V {
            type Output = Self;
            #[inline] fn mul(self, rhs: Self) -> Self { Self { $($f: self.$f * rhs.$f),+ } }
        }
        impl core::ops::Div for $V {
            type Output = Self;
            #[inline] fn div(self, rhs: Self) -> Self { Self { $($f: self.$f / rhs.$f),+ } }
        }

        impl core::ops::Add<$T> for $V {
            type Output = Self;
            #[inline] fn add(self, rhs: $T) -> Self { Self { $($f: self.$f + rhs),+ } }
        }
        impl core::ops::Sub<$T> for $V {
            type Output = Self;
            #[inline] fn sub(self, rhs: $T) -> Self { Self { $($f: self.$f - rhs),+ } }
        }
        impl core::ops::Mul<$T> for $V {
            type Output = Self;
            #[inline] fn mul(self, rhs: $T) -> Self { Self { $($f: self.$f * rhs),+ } }
        }
        impl core::ops::Div<$T> for $V {
            type Output = Self;
            #[inline] fn div(self, rhs: $T) -> Self { Self { $($f: self.$f / rhs),+ } }
        }

        impl core::ops::Add<$V> for $T {
            type Output = $V;
            #[inline] fn add(self, rhs: $V) -> $V { $V { $($f: self + rhs.$f),+ } }
        }
        impl core::ops::Mul<$V> for $T {
            type Output = $V;
            #[inline] fn mul(self, rhs: $V) -> $V { $V { $($f: self * rhs.$f),+ } }
        }

        impl core::ops::Neg for $V {
            type Output = Self;
            #[inline] fn neg(self) -> Self { Self { $($f: -self.$f),+ } }
        }

        impl core::ops::AddAssign for $V {
            #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
        }
        impl core::ops::SubAssign for $V {
            #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
        }
        impl core::ops::MulAssign for $V {
            #[inline] fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
        }
        impl core::ops::DivAssign for $V {
            #[inline] fn div_assign(&mut self, rhs: Self) { *self = *self / rhs; }
        }
        impl core::ops::AddAssign<$T> for $V {
            #[inline] fn add_assign(&mut self, rhs: $T) { *self = *self + rhs; }
        }
        impl core::ops::SubAssign<$T> for $V {
            #[inline] fn sub_assign(&mut self, rhs: $T) { *self = *self - rhs; }
        }
        impl core::ops::MulAssign<$T> for $V {
            #[inline] fn mul_assign(&mut self, rhs: $T) { *self = *self * rhs; }
        }
        impl core::ops::DivAssign<$T> for $V {
            #[inline] fn div_assign(&mut self, rhs: $T) { *self = *self / rhs; }
        }

        impl core::ops::Index<usize> for $V {
            type Output = $T;
            #[inline]
            fn index(&self, index: usize) -> &$T {
                match index {
                    $($i => &self.$f,)+
                    _ => panic!("{} index out of range: {}", stringify!($V), index),
                }
            }
        }
        impl core::ops::IndexMut<usize> for $V {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut $T {
                match index {
                    $($i => &mut self.$f,)+
                    _ => panic!("{} index out of range: {}", stringify!($V), index),
                }
            }
        }

        impl From<[$T; $N]> for $V {
            #[inline] fn from(a: [$T; $N]) -> Self { Self { $($f: a[$i]),+ } }
        }
        impl From<$V> for [$T; $N] {
            #[inline] fn from(v: $V) -> Self { [$(v.$f),+] }
        }
    };
}
