//! The savings goal entity.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::database_id::DatabaseId;

/// A savings goal, shared by the whole family or owned by one member.
///
/// Goals live in the record store and follow the same filter-by-member
/// convention as the other entities, but they are not part of the financial
/// totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The ID of the goal.
    pub id: DatabaseId,
    /// The display name of the goal.
    pub name: String,
    /// How much needs to be saved.
    pub target_amount: f64,
    /// How much has been saved so far.
    pub current_amount: f64,
    /// When the goal should be reached, if a deadline was set.
    pub deadline: Option<Date>,
    /// The member the goal belongs to. `None` means the whole family.
    pub member_id: Option<DatabaseId>,
    /// Whether the goal has been reached.
    pub is_completed: bool,
}

impl Goal {
    /// How far along the goal is, as a percentage of the target.
    ///
    /// A zero or negative target yields 0 rather than dividing by zero.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            0.0
        } else {
            self.current_amount / self.target_amount * 100.0
        }
    }
}

/// The fields required to create a new [Goal].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    /// The display name of the goal.
    pub name: String,
    /// How much needs to be saved.
    pub target_amount: f64,
    /// How much has already been saved.
    pub current_amount: f64,
    /// When the goal should be reached, if a deadline is wanted.
    pub deadline: Option<Date>,
    /// The member the goal belongs to, or `None` for the whole family.
    pub member_id: Option<DatabaseId>,
}

/// A partial update to a [Goal]. `None` leaves a field unchanged; the nested
/// options clear their field when set to `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalUpdate {
    /// Replace the display name.
    pub name: Option<String>,
    /// Replace the target amount.
    pub target_amount: Option<f64>,
    /// Replace the saved amount.
    pub current_amount: Option<f64>,
    /// Replace or clear the deadline.
    pub deadline: Option<Option<Date>>,
    /// Replace or clear the owning member.
    pub member_id: Option<Option<DatabaseId>>,
    /// Replace the completion flag.
    pub is_completed: Option<bool>,
}

impl GoalUpdate {
    /// Apply this patch to `goal`, field by field.
    pub fn apply_to(&self, goal: &mut Goal) {
        if let Some(name) = &self.name {
            goal.name = name.clone();
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(current_amount) = self.current_amount {
            goal.current_amount = current_amount;
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = deadline;
        }
        if let Some(member_id) = self.member_id {
            goal.member_id = member_id;
        }
        if let Some(is_completed) = self.is_completed {
            goal.is_completed = is_completed;
        }
    }
}
