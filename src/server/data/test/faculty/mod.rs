use crate::server::{
    data::{faculty::FacultyRepository, Repository},
    error::data::DataError,
    model::faculty::Faculty,
};
use test_utils::{builder::TestBuilder, factory};

use super::TestResult;

mod create;
mod delete;
mod find_all;
mod find_by_id;
mod update;

fn faculty(name: &str) -> Faculty {
    Faculty {
        id: 0,
        name: name.to_string(),
    }
}
