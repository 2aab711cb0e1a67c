//! Goal projection and dashboard assembly.
//!
//! Builds on the calculation module: the goal projector grades the current
//! pace against the period's availability target, and the dashboard
//! assembler combines everything into the view served over HTTP.

mod dashboard;
mod goal;

pub use dashboard::{
    DashboardProjection, DayInfo, PeriodInfo, ProgressInfo, TotalsInfo, WeekInfo,
    assemble_dashboard,
};
pub use goal::{GoalProjection, GoalStatus, project_goal};
