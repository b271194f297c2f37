//! Equities module - catalog models, refresh service, and traits.

mod equities_model;
mod equities_service;
mod equities_traits;

pub use equities_model::{Equity, RefreshOutcome, RefreshSummary};
pub use equities_service::EquityService;
pub use equities_traits::{EquityRepositoryTrait, EquityServiceTrait};
