use crate::{model::faculty::FacultyDto, server::model::DomainModel};

#[derive(Debug, Clone, PartialEq)]
pub struct Faculty {
    pub id: i32,
    pub name: String,
}

impl Faculty {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::faculty::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn from_dto(dto: FacultyDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }

    pub fn into_dto(self) -> FacultyDto {
        FacultyDto {
            id: self.id,
            name: self.name,
        }
    }
}

impl DomainModel for Faculty {
    const KIND: &'static str = "Faculty";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
