//! Macros for declaring game phase enums.

/// Declare a phase enum together with its transition table.
///
/// Each variant lists the label used for display and serialization and the
/// phases reachable from it. A variant with an empty list is terminal.
///
/// # Example
///
/// ```
/// use party_rounds::round_phases;
/// use party_rounds::core::{Phase, State};
///
/// round_phases! {
///     game: "Spin the Bottle",
///     pub enum SpinPhase {
///         Init = "INIT" => [Spin, Exit],
///         Spin = "SPIN" => [Kiss, Exit],
///         Kiss = "KISS" => [Spin, Exit],
///         Exit = "EXIT" => [],
///     }
///     initial: Init,
///     round_start: Spin,
/// }
///
/// assert_eq!(SpinPhase::INITIAL, SpinPhase::Init);
/// assert_eq!(SpinPhase::Kiss.name(), "KISS");
/// assert!(SpinPhase::Exit.is_final());
/// ```
#[macro_export]
macro_rules! round_phases {
    (
        game: $game:literal,
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $label:literal => [$($next:ident),* $(,)?]
            ),* $(,)?
        }
        initial: $initial:ident,
        round_start: $round_start:ident $(,)?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn is_final(&self) -> bool {
                $crate::core::Phase::successors(self).is_empty()
            }
        }

        impl $crate::core::Phase for $name {
            const GAME: &'static str = $game;
            const INITIAL: Self = Self::$initial;
            const ROUND_START: Self = Self::$round_start;
            const EDGES: &'static [(Self, &'static [Self])] = &[
                $((Self::$variant, &[$(Self::$next),*])),*
            ];
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
