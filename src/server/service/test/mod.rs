use crate::server::error::{data::DataError, AppError};
use test_utils::{builder::TestBuilder, factory};

mod preconditions;
