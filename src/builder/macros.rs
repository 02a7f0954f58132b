//! Macros for ergonomic state and trigger declarations.

/// Declare a fieldless enum usable as a state or trigger.
///
/// Derives `Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize`,
/// renders each variant by name through `Display`, and parses names
/// case-insensitively through `FromStr`.
///
/// # Example
///
/// ```
/// use lockstep::workflow_enum;
///
/// workflow_enum! {
///     pub enum DocState {
///         Draft,
///         Review,
///         Published,
///     }
/// }
///
/// assert_eq!(DocState::Review.to_string(), "Review");
/// assert_eq!("published".parse::<DocState>(), Ok(DocState::Published));
/// assert!("archived".parse::<DocState>().is_err());
/// assert_eq!(DocState::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! workflow_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ParseNameError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| $crate::core::ParseNameError {
                        type_name: stringify!($name),
                        input: s.to_string(),
                    })
            }
        }
    };
}
