use crate::server::{
    data::budget_transaction::BudgetTransactionRepository,
    model::budget::{ApproveTransactionParam, TransactionFilter},
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{BudgetCategory, TransactionStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod approved_entries;
mod get_paginated;
mod record_decision;
