#[cfg(not(feature = "ssr"))]
pub mod animation;
pub mod card_swap;
pub mod demo_form;
pub mod feature_orbit;
pub mod icon;
pub mod pages;

pub use card_swap::{CardSwap, SwapCard};
pub use demo_form::DemoRequestForm;
pub use feature_orbit::FeatureOrbit;
pub use icon::{Icon, icons};
