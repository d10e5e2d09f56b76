//! Search terms and results.

use crate::model::search::{
    AdminSearchDto, DriverSearchDto, LotMatchDto, SpotMatchDto, UserMatchDto,
};

use super::{
    lot::{AvailableLot, Lot},
    session::HistoryEntry,
    spot::Spot,
    user::User,
};

/// Normalized search term: trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalizes raw input.
    ///
    /// # Returns
    /// - `Some(SearchTerm)` - Input has at least one non-blank character
    /// - `None` - Input is empty or whitespace
    pub fn parse(raw: &str) -> Option<Self> {
        let term = raw.trim().to_lowercase();
        (!term.is_empty()).then_some(Self(term))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Accounts, lots and spots matching an administrator's search.
#[derive(Debug, Clone)]
pub struct AdminSearchResults {
    pub term: SearchTerm,
    pub users: Vec<User>,
    pub lots: Vec<Lot>,
    pub spots: Vec<Spot>,
}

impl AdminSearchResults {
    pub fn into_dto(self) -> AdminSearchDto {
        AdminSearchDto {
            query: self.term.0,
            users: self
                .users
                .into_iter()
                .map(|u| UserMatchDto {
                    id: u.id,
                    username: u.username,
                    email: u.email,
                    admin: u.admin,
                })
                .collect(),
            lots: self
                .lots
                .into_iter()
                .map(|l| LotMatchDto {
                    id: l.id,
                    name: l.name,
                    location: l.location,
                    capacity: l.capacity,
                })
                .collect(),
            spots: self
                .spots
                .into_iter()
                .map(|s| SpotMatchDto {
                    id: s.id,
                    label: s.label,
                    lot_id: s.lot_id,
                    available: !s.occupied,
                })
                .collect(),
        }
    }
}

/// Lots and own sessions matching a driver's search.
#[derive(Debug, Clone, Default)]
pub struct DriverSearchResults {
    /// Matching lots with their free spot count, full lots included.
    pub lots: Vec<AvailableLot>,
    /// Matching sessions, newest first.
    pub history: Vec<HistoryEntry>,
}

impl DriverSearchResults {
    pub fn into_dto(self) -> DriverSearchDto {
        DriverSearchDto {
            lots: self.lots.into_iter().map(|l| l.into_dto()).collect(),
            history: self.history.into_iter().map(|h| h.into_dto()).collect(),
        }
    }
}
