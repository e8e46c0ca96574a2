//! Lecturer and student domain models.
//!
//! Both share the personal data in `Person`; a student additionally belongs to a
//! group. They are stored in one table distinguished by role, but the domain keeps
//! them as separate entity kinds with their own ids.

use entity::sea_orm_active_enums::Gender;

use crate::{
    model::person::{GenderDto, LecturerDto, StudentDto},
    server::model::DomainModel,
};

/// Personal data shared by lecturers and students.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub phone_number: String,
    pub email: String,
}

impl Person {
    fn from_entity(entity: entity::person::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            gender: entity.gender,
            phone_number: entity.phone_number,
            email: entity.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lecturer {
    pub person: Person,
}

impl Lecturer {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The caller is responsible for only passing rows with the lecturer role.
    pub fn from_entity(entity: entity::person::Model) -> Self {
        Self {
            person: Person::from_entity(entity),
        }
    }

    pub fn from_dto(dto: LecturerDto) -> Self {
        Self {
            person: Person {
                id: dto.id,
                first_name: dto.first_name,
                last_name: dto.last_name,
                gender: dto.gender.into(),
                phone_number: dto.phone_number,
                email: dto.email,
            },
        }
    }

    pub fn into_dto(self) -> LecturerDto {
        LecturerDto {
            id: self.person.id,
            first_name: self.person.first_name,
            last_name: self.person.last_name,
            gender: self.person.gender.into(),
            phone_number: self.person.phone_number,
            email: self.person.email,
        }
    }
}

impl DomainModel for Lecturer {
    const KIND: &'static str = "Lecturer";

    fn id(&self) -> i32 {
        self.person.id
    }

    fn set_id(&mut self, id: i32) {
        self.person.id = id;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub person: Person,
    pub group_id: i32,
}

impl Student {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Student rows always carry a group; a missing one maps to `0`, which no
    /// stored group can have.
    pub fn from_entity(entity: entity::person::Model) -> Self {
        let group_id = entity.group_id.unwrap_or_default();

        Self {
            person: Person::from_entity(entity),
            group_id,
        }
    }

    pub fn from_dto(dto: StudentDto) -> Self {
        Self {
            person: Person {
                id: dto.id,
                first_name: dto.first_name,
                last_name: dto.last_name,
                gender: dto.gender.into(),
                phone_number: dto.phone_number,
                email: dto.email,
            },
            group_id: dto.group_id,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.person.id,
            first_name: self.person.first_name,
            last_name: self.person.last_name,
            gender: self.person.gender.into(),
            phone_number: self.person.phone_number,
            email: self.person.email,
            group_id: self.group_id,
        }
    }
}

impl DomainModel for Student {
    const KIND: &'static str = "Student";

    fn id(&self) -> i32 {
        self.person.id
    }

    fn set_id(&mut self, id: i32) {
        self.person.id = id;
    }
}

impl From<Gender> for GenderDto {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => GenderDto::Male,
            Gender::Female => GenderDto::Female,
        }
    }
}

impl From<GenderDto> for Gender {
    fn from(gender: GenderDto) -> Self {
        match gender {
            GenderDto::Male => Gender::Male,
            GenderDto::Female => Gender::Female,
        }
    }
}
