/// Generates felt newtype-wrappers and the `macro_prelude` module.
///
/// Note that this is a single-use macro as it generates a module.
///
/// Usage:
///     `felt_newtypes!([x1, x2, ..])`
/// where `x` is the set of `Felt` wrapper types.
macro_rules! felt_newtypes {
    ([$($felt:ident),* $(,)?]) => {
        crate::macros::felt_newtypes!(@define_felt $($felt),*);

        pub mod macro_prelude {
            pub use super::felt;

            crate::macros::felt_newtypes!(@generate_felt_macro $($felt),*);

            crate::macros::felt_newtypes!(@generate_use $($felt),*);
        }
    };

    (@define_felt $head:ident, $($tail:ident),+ $(,)?) => {
        crate::macros::felt_newtypes!(@define_felt $head);
        crate::macros::felt_newtypes!(@define_felt $($tail),+);
    };

    (@define_felt $target:ident) => {
        paste::paste! {
            #[derive(Copy, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, PartialOrd, Ord)]
            pub struct $target(pub multicall_crypto::Felt);

            #[allow(unused)]
            impl $target {
                pub const ZERO: Self = Self(multicall_crypto::Felt::ZERO);
            }

            impl From<$target> for multicall_crypto::Felt {
                fn from(value: $target) -> Self {
                    value.0
                }
            }

            $crate::macros::fmt::thin_debug!($target);
            $crate::macros::fmt::thin_display!($target);
        }
    };

    (@generate_use $head:ident, $($tail:ident),+ $(,)?) => {
        crate::macros::felt_newtypes!(@generate_use $head);
        crate::macros::felt_newtypes!(@generate_use $($tail),+);
    };

    (@generate_use $target:ident) => {
        paste::paste! {
            pub use [<$target:snake>];
        }
    };

    (@generate_felt_macro $head:ident, $($tail:ident),+ $(,)?) => {
        crate::macros::felt_newtypes!(@generate_felt_macro $head);
        crate::macros::felt_newtypes!(@generate_felt_macro $($tail),+);
    };

    (@generate_felt_macro $target:ident) => {
        paste::paste! {
            #[macro_export]
            macro_rules! [<$target:snake>] {
                ($hex:expr) => {
                    $target($crate::felt!($hex))
                };
            }
        }
    };
}
pub(super) use felt_newtypes;

pub(super) mod fmt {

    /// Adds a thin display implementation which uses the inner fields Display.
    macro_rules! thin_display {
        ($target:ty) => {
            impl std::fmt::Display for $target {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::Display::fmt(&self.0, f)
                }
            }
        };
    }

    /// Adds a thin Debug implementation, which skips `X(Felt(debug))` as `X(debug)`.
    ///
    /// The implementation uses Display of the wrapped value to produce smallest possible string, but
    /// still wraps it in a default Debug derive style `TypeName(hash)`.
    macro_rules! thin_debug {
        ($target:ty) => {
            impl std::fmt::Debug for $target {
                fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(fmt, "{}({})", stringify!($target), self.0)
                }
            }
        };
    }

    pub(crate) use {thin_debug, thin_display};
}

/// Creates a [Felt](multicall_crypto::Felt) from a hex string literal verified at compile time.
#[macro_export]
macro_rules! felt {
    ($hex:expr) => {{
        // This forces const evaluation of the macro call. Without this the invocation will only be evaluated
        // at runtime.
        const CONST_FELT: $crate::crypto::Felt = match $crate::crypto::Felt::from_hex_str($hex) {
            Ok(f) => f,
            Err($crate::crypto::HexParseError::InvalidNibble(_)) => panic!("Invalid hex digit"),
            Err($crate::crypto::HexParseError::InvalidLength { .. }) => {
                panic!("Too many hex digits")
            }
            Err($crate::crypto::HexParseError::Overflow) => panic!("Felt overflow"),
        };
        CONST_FELT
    }};
}
