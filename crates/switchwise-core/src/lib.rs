//! # Switchwise Core Library
//!
//! Decides, for a given day, whether and how a holder of Swiss mandatory
//! health insurance may switch plans, and ranks the cheapest alternatives
//! against the plan they hold today.
//!
//! ## Architecture
//!
//! Every component is a pure function of an explicit snapshot
//! `(profile, offers, today)`:
//!
//! - **Deadlines**: business-day roll-back and day counts ([`windows::deadline`])
//! - **Windows**: which of model, mid-year and annual change are open ([`windows`])
//! - **Comparison**: categorised offers, four ranked slots and same-insurer
//!   model alternatives ([`compare`])
//! - **Presentation**: swappable wording and savings formatting ([`present`])
//!
//! Offers come from an external pricing catalog through [`OfferSource`];
//! the date comes from a [`Clock`].
//!
//! ## Key Components
//!
//! - [`SwitchEngine`]: evaluation facade bound to a clock
//! - [`PlanOffer`]: one validated catalog quote
//! - [`UserProfile`]: the consumer's current situation
//! - [`Config`]: application configuration management

pub mod clock;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod plan;
pub mod present;
pub mod profile;
pub mod source;
pub mod windows;

pub use clock::{Clock, FixedClock, SystemClock};
pub use compare::{
    categorize, AlternativeRow, AnnualSavings, CategorizedOffers, ComparisonEntry,
    ComparisonResult, ComparisonSlot, SlotRole,
};
pub use config::Config;
pub use engine::{evaluate_at, Evaluation, SwitchEngine};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use plan::{AccidentCoverage, AgeBracket, OfferRow, PlanCategory, PlanOffer};
pub use present::{EnglishPresenter, WindowPresenter, WindowText};
pub use profile::UserProfile;
pub use source::{OfferFilter, OfferSource, SnapshotSource};
pub use windows::{EligibilityWindow, WindowKind};
