/// Derives the owned-operand variants of a binary operator from its `&lhs op &rhs` impl.
///
/// `N` in the types refers to the const generic parameter introduced by the generated impls.
macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $lhs:ty, $rhs:ty => $out:ty) => {
        impl<const N: usize> $imp<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                $imp::$method(&self, &rhs)
            }
        }

        impl<'a, const N: usize> $imp<&'a $rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: &'a $rhs) -> $out {
                $imp::$method(&self, rhs)
            }
        }

        impl<'a, const N: usize> $imp<$rhs> for &'a $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                $imp::$method(self, &rhs)
            }
        }
    };
}

/// Implements `op_assign(&mut self, rhs)` as `*self = &*self op rhs`, for both owned and borrowed
/// right-hand sides.
///
/// Replacing `*self` with a freshly computed value also resets the cached magnitude/determinant.
macro_rules! assign_via_binop {
    (impl $imp:ident, $method:ident via $op:ident::$op_method:ident for $lhs:ty, $rhs:ty) => {
        impl<const N: usize> $imp<$rhs> for $lhs {
            #[inline]
            fn $method(&mut self, rhs: $rhs) {
                *self = $op::$op_method(&*self, &rhs);
            }
        }

        impl<'a, const N: usize> $imp<&'a $rhs> for $lhs {
            #[inline]
            fn $method(&mut self, rhs: &'a $rhs) {
                *self = $op::$op_method(&*self, rhs);
            }
        }
    };
}
