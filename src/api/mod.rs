//! HTTP API module for the hour engine.
//!
//! This module provides the REST API endpoints for recording worked
//! hours and reading closure-period balances and projections.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ClosureConfigRequest, HolidayOverrideRequest, HourAdjustmentRequest, HourEntryRequest,
};
pub use response::{ApiError, PeriodBalanceResponse};
pub use state::AppState;
