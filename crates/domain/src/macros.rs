//! Macro for implementing Display, FromStr and variant listing for the
//! domain's string-backed enums
//!
//! Categories, statuses and kinds all travel as lowercase strings (seed
//! files, filter toolbars, log fields). The macro keeps those conversions in
//! one place.
//!
//! # Example
//!
//! ```rust
//! use yearflow_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Season {
//!     Spring,
//!     Autumn,
//! }
//!
//! impl_domain_enum_conversions!(Season {
//!     Spring => "spring",
//!     Autumn => "autumn",
//! });
//!
//! assert_eq!(Season::ALL.len(), 2);
//! assert_eq!("AUTUMN".parse::<Season>().unwrap(), Season::Autumn);
//! ```

/// Implements `Display`, `FromStr`, `as_str` and an `ALL` constant for a
/// fieldless enum.
///
/// - `Display` and `as_str` produce the lowercase wire name
/// - `FromStr` is case-insensitive
/// - `ALL` lists variants in declaration order
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$variant),+];

            /// Lowercase wire name of the variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
