//! Helper macro for port error enums.
//!
//! Every variant carries a single `message` and gets a snake-case constructor
//! accepting anything convertible into `String`:
//!
//! ```ignore
//! define_port_error! {
//!     pub enum ShelfError {
//!         Connection => "shelf connection failed",
//!     }
//! }
//! assert_eq!(
//!     ShelfError::connection("timed out").to_string(),
//!     "shelf connection failed: timed out",
//! );
//! ```

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $prefix:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{prefix}: {message}", prefix = $prefix)]
                $variant { message: String },
            )+
        }

        ::paste::paste! {
            impl $name {
                $(
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                )+
            }
        }
    };
}

pub(crate) use define_port_error;
