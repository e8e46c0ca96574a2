use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenderDto {
    Male,
    Female,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct LecturerDto {
    #[serde(default)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: GenderDto,
    /// International format, e.g. +380501234567
    pub phone_number: String,
    pub email: String,
}

/// A student. The group is given by the `group-id` query parameter on create and
/// update and returned here on reads.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct StudentDto {
    #[serde(default)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: GenderDto,
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub group_id: i32,
}
