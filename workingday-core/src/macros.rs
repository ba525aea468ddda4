#![macro_use]

macro_rules! impl_total_minutes_conversions {
    ($($integer_type: ty),*) => {
        $(
        impl TryFrom<$integer_type> for $crate::Time {
            type Error = $crate::TimeError;

            fn try_from(value: $integer_type) -> Result<Self, Self::Error> {
                let total = i64::try_from(value).map_err(|_| {
                    $crate::TimeError::invalid(format!(
                        "could not convert {} to a minute count",
                        value
                    ))
                })?;
                Self::from_integer(total)
            }
        }

        impl TryFrom<$crate::Time> for $integer_type {
            type Error = $crate::TimeError;

            fn try_from(value: $crate::Time) -> Result<Self, Self::Error> {
                <$integer_type>::try_from(value.to_integer()).map_err(|_| {
                    $crate::TimeError::invalid(format!(
                        "could not convert {} to {}",
                        value,
                        stringify!($integer_type)
                    ))
                })
            }
        }
        )*
    };
}
