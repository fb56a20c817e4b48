//! Helper macro for declaring port error enums with snake_case constructors.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $field:ident : $ty:ty }) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($field: impl Into<$ty>) -> Self {
                Self::$variant { $field: $field.into() }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $field:ident : $ty:ty } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( {
                    #[doc = "Failure detail."]
                    $field : $ty
                } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $field : $ty } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        /// Exercise both variant shapes the macro supports.
        pub enum ExamplePortError {
            /// Unit variant.
            Gone => "gone",
            /// Message-carrying variant.
            Broken { message: String } => "broken: {message}",
        }
    }

    #[test]
    fn unit_constructor_builds_variant() {
        assert_eq!(ExamplePortError::gone(), ExamplePortError::Gone);
    }

    #[test]
    fn message_constructor_accepts_str() {
        let err = ExamplePortError::broken("pipe");
        assert_eq!(err.to_string(), "broken: pipe");
    }
}
