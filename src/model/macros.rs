/// Generate the lookup and string-conversion surface for a fieldless enum
/// whose discriminants double as array indices.
///
/// Adds `ALL`, `COUNT`, `index`, `from_index`, `as_str`, `Display`,
/// `From<T> for String`, and `TryFrom<String> for T`. Add
/// `#[serde(into = "String", try_from = "String")]` to the enum to get
/// Serialize/Deserialize through the string form. Variants must be listed
/// in declaration order.
macro_rules! indexed_enum {
    ($name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant, in index order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub const COUNT: usize = [$($str,)+].len();

            pub fn index(self) -> usize {
                self as usize
            }

            /// Look up a variant by index. Out-of-range indices yield `None`.
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.as_str().to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                match s.as_str() {
                    $($str => Ok($name::$variant),)+
                    other => Err(format!("unknown {}: {other}", stringify!($name))),
                }
            }
        }
    };
}
