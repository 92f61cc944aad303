//! Core models and logic for the landing site: carousel animation math,
//! static content and demo scheduling

pub mod card_swap;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod demo;
pub mod orbit;

pub use card_swap::{CardSlot, CardSwapConfig, CardSwapDeck, Swap};
pub use content::{
    BillingCycle, FAQ_ENTRIES, FEATURES, FaqAccordion, FaqEntry, Feature, FeatureColor,
    FeatureWidget, PRICING_PLANS, PricingPlan,
};
pub use demo::{ApiError, DemoRequest, DemoResponse, DemoValidationError};
pub use orbit::{AnimatorState, CardTransform, FrameClock, OrbitAnimator, OrbitConfig};
