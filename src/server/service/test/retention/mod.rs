use std::path::Path;

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::retention::RetentionService};

mod cleanup;
