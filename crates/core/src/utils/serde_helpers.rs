//! Serde helpers for the loosely-cased values found in Pants output and settings files

/// Implement case-insensitive `Deserialize` for a fieldless enum.
///
/// Each variant lists one or more accepted spellings in lowercase:
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     Severity,
///     Error => "error",
///     Warning => "warning" | "warn",
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $first:literal $(| $alias:literal)*),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $first $(| $alias)* => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($first),+].join(", ")
                    ))),
                }
            }
        }
    };
}
