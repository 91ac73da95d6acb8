//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its panel state signal and binds it to the catalog entry it
//! renders; rendering details are delegated to `components`.

pub mod coevolution;
pub mod evolution;
pub mod home;
