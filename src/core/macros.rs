//! Macros for declaring state enums.

/// Generate a `State` implementation for a plain enum.
///
/// # Example
///
/// ```
/// use motorpool::state_enum;
/// use motorpool::core::State;
///
/// state_enum! {
///     pub enum GateState {
///         Closed,
///         Opening,
///         Open,
///         Jammed,
///     }
/// }
///
/// assert_eq!(GateState::Opening.name(), "Opening");
/// assert_eq!(GateState::Jammed.name(), "Jammed");
/// ```
#[macro_export]
macro_rules! state_enum {
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum SignalState {
            Dark,
            Amber,
            Green,
            Fault,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(SignalState::Dark.name(), "Dark");
        assert_eq!(SignalState::Amber.name(), "Amber");
        assert_eq!(SignalState::Fault.name(), "Fault");
        assert_ne!(SignalState::Green, SignalState::Amber);
    }

    #[test]
    fn state_enum_derives_serde() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        let json = serde_json::to_string(&MinimalState::Two).unwrap();
        assert_eq!(json, "\"Two\"");
        let back: MinimalState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MinimalState::Two);
        assert_eq!(MinimalState::One.name(), "One");
    }
}
