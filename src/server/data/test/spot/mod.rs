use crate::server::{
    data::spot::SpotRegistry,
    model::spot::{ClaimOutcome, ReleaseOutcome},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod claim;
mod list_free;
mod release;
