use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::DayOfWeek;

/// A weekly recurring lesson. There is no calendar date, only a day of week
/// and a lesson time slot.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub audience: String,
    pub day: DayOfWeek,
    pub lesson_time_id: i32,
    pub lecturer_id: i32,
    pub group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson_time::Entity",
        from = "Column::LessonTimeId",
        to = "super::lesson_time::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LessonTime,
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::LecturerId",
        to = "super::person::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lecturer,
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Group,
}

impl Related<super::lesson_time::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonTime.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecturer.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
