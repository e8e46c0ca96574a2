//! Schedule resolution.
//!
//! Lessons recur weekly on a day of week. A week schedule groups a subject's lessons by
//! that day; a month schedule projects the recurrence onto every calendar date of the
//! month whose weekday matches. Within a day lessons are ordered by slot start time,
//! then by lesson id.
//!
//! `ScheduleResolver` only reads: it raises `DataError` and never checks its input.
//! `ScheduleService` runs it through the operation pipeline.

use chrono::Datelike;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::lesson::LessonRepository,
    error::{data::DataError, AppError},
    model::{
        lesson::day_of_week,
        schedule::{MonthSchedule, ScheduledLesson, Subject, WeekSchedule, YearMonth},
    },
    service::pipeline::{execute, log_read, require_positive_id, Operation},
};

/// Orders the lessons of one day by start time, then id.
fn sort_day(lessons: &mut [ScheduledLesson]) {
    lessons.sort_by_key(|scheduled| (scheduled.time.start_time, scheduled.lesson.id));
}

/// Groups lessons by their day of week. Days without lessons get no entry.
pub fn group_by_day(lessons: Vec<ScheduledLesson>) -> WeekSchedule {
    let mut week = WeekSchedule::new();

    for scheduled in lessons {
        week.entry(scheduled.lesson.day).or_default().push(scheduled);
    }
    for day in week.values_mut() {
        sort_day(day);
    }

    week
}

/// Lists, for every date of `month`, the lessons recurring on that date's weekday.
///
/// Dates on which nothing recurs get no entry, so an empty lesson list yields an
/// empty schedule.
pub fn project_onto_month(month: YearMonth, lessons: &[ScheduledLesson]) -> MonthSchedule {
    let mut schedule = MonthSchedule::new();

    for date in month.days() {
        let day = day_of_week(date.weekday());

        let mut on_date: Vec<ScheduledLesson> = lessons
            .iter()
            .filter(|scheduled| scheduled.lesson.day == day)
            .cloned()
            .collect();

        if !on_date.is_empty() {
            sort_day(&mut on_date);
            schedule.insert(date, on_date);
        }
    }

    schedule
}

/// Resolves week and month schedules from stored lessons.
pub struct ScheduleResolver<'a> {
    lessons: LessonRepository<'a>,
}

impl<'a> ScheduleResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            lessons: LessonRepository::new(db),
        }
    }

    /// Lessons of the subject grouped by day of week. An unknown subject has none.
    pub async fn week_lessons(&self, subject: Subject) -> Result<WeekSchedule, DataError> {
        let lessons = self.lessons.find_by_subject(subject).await?;

        Ok(group_by_day(lessons))
    }

    /// Lessons of the subject on every date of the month. An unknown subject has none.
    pub async fn month_lessons(
        &self,
        subject: Subject,
        month: YearMonth,
    ) -> Result<MonthSchedule, DataError> {
        let lessons = self.lessons.find_by_subject(subject).await?;

        Ok(project_onto_month(month, &lessons))
    }
}

/// Schedule operations run through the pipeline.
pub struct ScheduleService<'a> {
    resolver: ScheduleResolver<'a>,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            resolver: ScheduleResolver::new(db),
        }
    }

    /// # Returns
    /// - `Ok(WeekSchedule)` - Lessons by day of week, possibly empty
    /// - `Err(AppError::InvalidArgument)` - Subject id is not positive; the store is not queried
    /// - `Err(AppError::StorageFailure)` - Store failed
    pub async fn week_lessons(&self, subject: Subject) -> Result<WeekSchedule, AppError> {
        let kind = subject.kind();
        let operation = Operation::WeekLessons;

        require_positive_id(kind, operation, subject.id())?;
        tracing::debug!(kind, id = subject.id(), "Resolving week lessons");

        let week = execute(kind, operation, self.resolver.week_lessons(subject)).await?;

        log_read(kind, operation, week.len());
        Ok(week)
    }

    /// # Returns
    /// - `Ok(MonthSchedule)` - Lessons by calendar date, possibly empty
    /// - `Err(AppError::InvalidArgument)` - Subject id is not positive; the store is not queried
    /// - `Err(AppError::StorageFailure)` - Store failed
    pub async fn month_lessons(
        &self,
        subject: Subject,
        month: YearMonth,
    ) -> Result<MonthSchedule, AppError> {
        let kind = subject.kind();
        let operation = Operation::MonthLessons;

        require_positive_id(kind, operation, subject.id())?;
        tracing::debug!(kind, id = subject.id(), month = %month, "Resolving month lessons");

        let schedule = execute(kind, operation, self.resolver.month_lessons(subject, month)).await?;

        log_read(kind, operation, schedule.len());
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use entity::sea_orm_active_enums::DayOfWeek;

    use super::*;
    use crate::server::model::{lesson::Lesson, lesson_time::LessonTime};

    fn scheduled(id: i32, day: DayOfWeek, start_hour: u32) -> ScheduledLesson {
        ScheduledLesson {
            lesson: Lesson {
                id,
                name: format!("Lesson {}", id),
                audience: "A-1".to_string(),
                day,
                lesson_time_id: start_hour as i32,
                lecturer_id: 1,
                group_id: 1,
            },
            time: LessonTime {
                id: start_hour as i32,
                start_time: NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(start_hour + 1, 0, 0).unwrap(),
            },
        }
    }

    fn ids(lessons: &[ScheduledLesson]) -> Vec<i32> {
        lessons.iter().map(|s| s.lesson.id).collect()
    }

    /// Tests grouping by day with ordering inside a day.
    ///
    /// Expected: two days; Monday ordered by start time then id
    #[test]
    fn groups_lessons_by_day() {
        let week = group_by_day(vec![
            scheduled(1, DayOfWeek::Monday, 12),
            scheduled(2, DayOfWeek::Friday, 9),
            scheduled(3, DayOfWeek::Monday, 9),
            scheduled(4, DayOfWeek::Monday, 12),
        ]);

        assert_eq!(week.len(), 2);
        assert_eq!(ids(&week[&DayOfWeek::Monday]), vec![3, 1, 4]);
        assert_eq!(ids(&week[&DayOfWeek::Friday]), vec![2]);
    }

    /// Tests projecting a Wednesday lesson onto March 2021.
    ///
    /// March 2021 starts on a Monday, so its Wednesdays are the 3rd, 10th, 17th,
    /// 24th and 31st.
    ///
    /// Expected: exactly those five dates, each with the lesson
    #[test]
    fn projects_weekday_onto_month() {
        let month = YearMonth::new(2021, 3).unwrap();
        let lesson = scheduled(7, DayOfWeek::Wednesday, 9);

        let schedule = project_onto_month(month, std::slice::from_ref(&lesson));

        let mut dates: Vec<NaiveDate> = schedule.keys().copied().collect();
        dates.sort();

        let expected: Vec<NaiveDate> = [3, 10, 17, 24, 31]
            .into_iter()
            .map(|day| NaiveDate::from_ymd_opt(2021, 3, day).unwrap())
            .collect();

        assert_eq!(dates, expected);
        assert!(schedule.values().all(|day| day == &vec![lesson.clone()]));
    }

    /// Tests that every date in a projection falls on a lesson's weekday.
    ///
    /// Expected: for each entry, every lesson's day matches the date's weekday
    #[test]
    fn projected_dates_match_lesson_days() {
        let month = YearMonth::new(2024, 2).unwrap();
        let lessons = vec![
            scheduled(1, DayOfWeek::Thursday, 9),
            scheduled(2, DayOfWeek::Saturday, 10),
            scheduled(3, DayOfWeek::Thursday, 8),
        ];

        let schedule = project_onto_month(month, &lessons);

        // Leap February 2024: 5 Thursdays and 4 Saturdays
        assert_eq!(schedule.len(), 9);
        for (date, day) in &schedule {
            assert_eq!(date.month(), 2);
            assert!(day
                .iter()
                .all(|s| s.lesson.day == day_of_week(date.weekday())));
        }

        let first_thursday = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(ids(&schedule[&first_thursday]), vec![3, 1]);
    }

    /// Tests projecting no lessons.
    ///
    /// Expected: empty schedule, not an entry per date
    #[test]
    fn empty_lessons_give_empty_month() {
        let month = YearMonth::new(2021, 3).unwrap();

        assert!(project_onto_month(month, &[]).is_empty());
    }
}
