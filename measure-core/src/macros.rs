//! Macros for declaring typed products and quotients between quantities.

/// Implements `Mul`/`Div` between measures of named quantities with a statically known result quantity.
///
/// Each rule is checked at compile time: the declared result family must equal the combined family of the operands.
/// The operators return [`MeasureResult`](crate::MeasureResult) because the result is re-validated against the
/// result quantity's restriction.
///
/// ```rust,ignore
/// impl_quantity_products! {
///     Current * Time => Charge,
///     Length / Time => Velocity,
/// }
/// ```
#[macro_export]
macro_rules! impl_quantity_products {
    () => {};

    ($lhs:ident * $rhs:ident => $out:ident $(, $($rest:tt)*)?) => {
        const _: () = assert!(
            <$lhs as $crate::Quantity>::FAMILY
                .combine(<$rhs as $crate::Quantity>::FAMILY, $crate::FamilyOp::Add)
                .const_eq(&<$out as $crate::Quantity>::FAMILY),
            concat!(
                "family of ",
                stringify!($lhs),
                " * ",
                stringify!($rhs),
                " is not ",
                stringify!($out)
            )
        );

        impl ::core::ops::Mul<$crate::Measure<$rhs>> for $crate::Measure<$lhs> {
            type Output = $crate::MeasureResult<$crate::Measure<$out>>;

            #[inline]
            fn mul(self, rhs: $crate::Measure<$rhs>) -> Self::Output {
                $crate::Measure::<$out>::of(self.value() * rhs.value())
            }
        }

        $($crate::impl_quantity_products!($($rest)*);)?
    };

    ($lhs:ident / $rhs:ident => $out:ident $(, $($rest:tt)*)?) => {
        const _: () = assert!(
            <$lhs as $crate::Quantity>::FAMILY
                .combine(<$rhs as $crate::Quantity>::FAMILY, $crate::FamilyOp::Subtract)
                .const_eq(&<$out as $crate::Quantity>::FAMILY),
            concat!(
                "family of ",
                stringify!($lhs),
                " / ",
                stringify!($rhs),
                " is not ",
                stringify!($out)
            )
        );

        impl ::core::ops::Div<$crate::Measure<$rhs>> for $crate::Measure<$lhs> {
            type Output = $crate::MeasureResult<$crate::Measure<$out>>;

            #[inline]
            fn div(self, rhs: $crate::Measure<$rhs>) -> Self::Output {
                if rhs.value() == 0.0 {
                    return Err($crate::MeasureError::DivisionByZero);
                }
                $crate::Measure::<$out>::of(self.value() / rhs.value())
            }
        }

        $($crate::impl_quantity_products!($($rest)*);)?
    };
}
