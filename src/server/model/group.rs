use crate::{model::group::GroupDto, server::model::DomainModel};

/// A student group belonging to exactly one faculty.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub faculty_id: i32,
}

impl Group {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            faculty_id: entity.faculty_id,
        }
    }

    pub fn from_dto(dto: GroupDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            faculty_id: dto.faculty_id,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            faculty_id: self.faculty_id,
        }
    }
}

impl DomainModel for Group {
    const KIND: &'static str = "Group";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
