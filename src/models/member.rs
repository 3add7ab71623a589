//! The family member entity.

use serde::{Deserialize, Serialize};

use crate::database_id::DatabaseId;

/// A member of the family.
///
/// Transactions, accounts and goals reference members by ID. The core never
/// cascades deletes; what happens to referencing records when a member goes
/// away is the data source's policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// The ID of the member.
    pub id: DatabaseId,
    /// The member's name.
    pub name: String,
    /// The member's regular monthly income.
    pub monthly_income: f64,
}

/// The fields required to create a new [FamilyMember].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFamilyMember {
    /// The member's name.
    pub name: String,
    /// The member's regular monthly income.
    pub monthly_income: f64,
}

/// A partial update to a [FamilyMember]. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyMemberUpdate {
    /// Replace the name.
    pub name: Option<String>,
    /// Replace the monthly income.
    pub monthly_income: Option<f64>,
}

impl FamilyMemberUpdate {
    /// Apply this patch to `member`, field by field.
    pub fn apply_to(&self, member: &mut FamilyMember) {
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(monthly_income) = self.monthly_income {
            member.monthly_income = monthly_income;
        }
    }
}
