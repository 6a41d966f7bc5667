//! Operator sugar over the checked arithmetic of [`Fraction`].
//!
//! Like the operators on primitive integers, these panic where the checked
//! method would return an error. Use the `checked_*` methods to handle
//! division by zero and overflow.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Fraction;

macro_rules! impl_op {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident => $checked:ident;)*) => {
        $(
            #[doc = concat!(" Panicking form of [`Fraction::", stringify!($checked), "`].")]
            ///
            /// # Panics
            ///
            /// Panics on overflow or division by zero.
            impl $op for Fraction {
                type Output = Fraction;

                #[inline]
                #[track_caller]
                fn $method(self, rhs: Fraction) -> Fraction {
                    match self.$checked(rhs) {
                        Ok(value) => value,
                        Err(error) => panic!("{error}"),
                    }
                }
            }

            impl $op<i64> for Fraction {
                type Output = Fraction;

                #[inline]
                #[track_caller]
                fn $method(self, rhs: i64) -> Fraction {
                    $op::$method(self, Fraction::from_integer(rhs))
                }
            }

            impl $assign for Fraction {
                #[inline]
                #[track_caller]
                fn $assign_method(&mut self, rhs: Fraction) {
                    *self = $op::$method(*self, rhs);
                }
            }
        )*
    };
}

impl_op! {
    Add::add, AddAssign::add_assign => checked_add;
    Sub::sub, SubAssign::sub_assign => checked_sub;
    Mul::mul, MulAssign::mul_assign => checked_mul;
    Div::div, DivAssign::div_assign => checked_div;
}

/// Panicking form of [`Fraction::checked_neg`].
///
/// # Panics
///
/// Panics if the numerator is `i64::MIN`.
impl Neg for Fraction {
    type Output = Fraction;

    #[inline]
    #[track_caller]
    fn neg(self) -> Fraction {
        match self.checked_neg() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
