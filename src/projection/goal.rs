//! Goal projection.
//!
//! Extrapolates the current balance to the end of the period at the pace
//! kept so far and grades the result against the period's availability
//! target.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Scale used for hour amounts.
const SCALE: u32 = 2;

/// Scale used for the projected/target ratio.
const RATIO_SCALE: u32 = 4;

/// Ratio below which the goal is considered out of reach.
fn risk_threshold() -> Decimal {
    Decimal::new(70, 2)
}

/// Three-level verdict on whether the availability target is still reachable.
///
/// # Example
///
/// ```
/// use hour_engine::projection::GoalStatus;
///
/// let json = serde_json::to_string(&GoalStatus::AtRisk).unwrap();
/// assert_eq!(json, "\"AT_RISK\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    /// Projected balance reaches the target (ratio >= 1).
    Attainable,
    /// Projected balance lands within 70% of the target, or the period has
    /// not started yet.
    AtRisk,
    /// Projected balance falls short of 70% of the target.
    Impossible,
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalStatus::Attainable => write!(f, "ATTAINABLE"),
            GoalStatus::AtRisk => write!(f, "AT_RISK"),
            GoalStatus::Impossible => write!(f, "IMPOSSIBLE"),
        }
    }
}

/// Pace, projection, and verdict for a period in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalProjection {
    /// Balance accumulated per elapsed day, rounded to two decimal places.
    pub current_rate_per_day: Decimal,
    /// `current_rate_per_day` extrapolated over the whole period.
    pub projected_balance_at_end: Decimal,
    /// The period's total available hours, rounded to two decimal places.
    pub target_hours: Decimal,
    /// Verdict of projected balance against the target.
    pub goal_status: GoalStatus,
}

/// Projects the end-of-period balance and grades it against the target.
///
/// Returns `None` when no positive weekly goal is configured or the period
/// has no positive availability; the projection is meaningless in both
/// cases and callers serialize the absence as an explicit null.
///
/// # Behavior
///
/// - Before any day has elapsed there is no pace to extrapolate: the rate
///   is zero, the projected balance is the current balance unchanged, and
///   the verdict is [`GoalStatus::AtRisk`].
/// - Otherwise the daily rate is `current_balance / days_elapsed` rounded
///   half-up to two decimals, the projection is that rate times the total
///   day count, and the verdict compares projection/target against 1.0 and
///   0.70.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use hour_engine::projection::{GoalStatus, project_goal};
///
/// let projection = project_goal(
///     Decimal::from(120),
///     21,
///     31,
///     Decimal::from(80),
///     Some(Decimal::from(40)),
/// )
/// .unwrap();
/// assert_eq!(projection.current_rate_per_day, Decimal::new(571, 2));
/// assert_eq!(projection.projected_balance_at_end, Decimal::new(17701, 2));
/// assert_eq!(projection.goal_status, GoalStatus::Attainable);
/// ```
pub fn project_goal(
    current_balance: Decimal,
    days_elapsed: i64,
    total_days: i64,
    total_available_hours: Decimal,
    expected_weekly_hours: Option<Decimal>,
) -> Option<GoalProjection> {
    let expected = expected_weekly_hours?;
    if expected <= Decimal::ZERO || total_available_hours <= Decimal::ZERO {
        return None;
    }

    let target_hours = total_available_hours
        .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);

    if days_elapsed <= 0 {
        return Some(GoalProjection {
            current_rate_per_day: Decimal::ZERO,
            projected_balance_at_end: current_balance,
            target_hours,
            goal_status: GoalStatus::AtRisk,
        });
    }

    let current_rate_per_day = (current_balance / Decimal::from(days_elapsed))
        .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
    let projected_balance_at_end = (current_rate_per_day * Decimal::from(total_days))
        .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);

    let ratio = if target_hours > Decimal::ZERO {
        (projected_balance_at_end / target_hours)
            .round_dp_with_strategy(RATIO_SCALE, RoundingStrategy::MidpointAwayFromZero)
    } else {
        Decimal::ZERO
    };

    let goal_status = if ratio >= Decimal::ONE {
        GoalStatus::Attainable
    } else if ratio >= risk_threshold() {
        GoalStatus::AtRisk
    } else {
        GoalStatus::Impossible
    };

    Some(GoalProjection {
        current_rate_per_day,
        projected_balance_at_end,
        target_hours,
        goal_status,
    })
}
