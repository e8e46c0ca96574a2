//! Schedule domain models.
//!
//! A schedule is a view over stored lessons: lessons recur weekly by day of week,
//! and month schedules project that recurrence onto calendar dates.

use chrono::{Datelike, NaiveDate};
use entity::sea_orm_active_enums::DayOfWeek;
use std::{collections::HashMap, fmt, str::FromStr};

use crate::{
    model::schedule::ScheduledLessonDto,
    server::{
        error::AppError,
        model::{lesson::Lesson, lesson_time::LessonTime},
    },
};

/// Whose lessons a schedule lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Group(i32),
    Lecturer(i32),
}

impl Subject {
    pub fn id(&self) -> i32 {
        match self {
            Self::Group(id) | Self::Lecturer(id) => *id,
        }
    }

    /// Entity kind of the subject, used in log records and failure messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Group(_) => "Group",
            Self::Lecturer(_) => "Lecturer",
        }
    }
}

/// A lesson together with its resolved time slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledLesson {
    pub lesson: Lesson,
    pub time: LessonTime,
}

impl ScheduledLesson {
    /// Converts a lesson row and its lesson time row at the repository boundary.
    pub fn from_entity(lesson: entity::lesson::Model, time: entity::lesson_time::Model) -> Self {
        Self {
            lesson: Lesson::from_entity(lesson),
            time: LessonTime::from_entity(time),
        }
    }

    pub fn into_dto(self) -> ScheduledLessonDto {
        ScheduledLessonDto {
            id: self.lesson.id,
            name: self.lesson.name,
            audience: self.lesson.audience,
            day: self.lesson.day.into(),
            lecturer_id: self.lesson.lecturer_id,
            group_id: self.lesson.group_id,
            lesson_time: self.time.into_dto(),
        }
    }
}

/// Lessons of one subject keyed by day of week; days without lessons are absent.
pub type WeekSchedule = HashMap<DayOfWeek, Vec<ScheduledLesson>>;

/// Lessons of one subject keyed by calendar date; dates without lessons are absent.
pub type MonthSchedule = HashMap<NaiveDate, Vec<ScheduledLesson>>;

/// A calendar month of a specific year, written `yyyy-mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// Returns `None` when `month` is outside `1..=12` or the year is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Every date of the month in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month();

        self.first_day
            .iter_days()
            .take_while(move |date| date.month() == month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    /// Parses the strict `yyyy-mm` form, e.g. `2021-03`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::InvalidArgument(format!(
                "Month value '{}' must have the format yyyy-mm",
                value
            ))
        };

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        let is_digits = |part: &str, len: usize| {
            part.len() == len && part.chars().all(|c| c.is_ascii_digit())
        };
        if !is_digits(year, 4) || !is_digits(month, 2) {
            return Err(invalid());
        }

        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}
