use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        faculty::FacultyDto,
        group::GroupDto,
        lesson::{DayOfWeekDto, LessonDto},
        lesson_time::LessonTimeDto,
        person::{GenderDto, LecturerDto, StudentDto},
        schedule::ScheduledLessonDto,
    },
    server::{
        controller::{
            faculty::{
                self, create_faculty, delete_faculty, get_faculties, get_faculty, update_faculty,
            },
            group::{
                self, create_group, delete_group, get_group, get_groups, update_group,
            },
            lecturer::{
                self, create_lecturer, delete_lecturer, get_lecturer, get_lecturers,
                update_lecturer,
            },
            lesson::{
                self, create_lesson, delete_lesson, get_lesson, get_lessons, update_lesson,
            },
            lesson_time::{
                self, create_lesson_time, delete_lesson_time, get_lesson_time, get_lesson_times,
                update_lesson_time,
            },
            schedule::{
                self, get_month_lessons_for_group, get_month_lessons_for_lecturer,
                get_week_lessons_for_group, get_week_lessons_for_lecturer,
            },
            student::{
                self, create_student, delete_student, get_student, get_students, update_student,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        faculty::get_faculties,
        faculty::get_faculty,
        faculty::create_faculty,
        faculty::update_faculty,
        faculty::delete_faculty,
        group::get_groups,
        group::get_group,
        group::create_group,
        group::update_group,
        group::delete_group,
        lecturer::get_lecturers,
        lecturer::get_lecturer,
        lecturer::create_lecturer,
        lecturer::update_lecturer,
        lecturer::delete_lecturer,
        student::get_students,
        student::get_student,
        student::create_student,
        student::update_student,
        student::delete_student,
        lesson_time::get_lesson_times,
        lesson_time::get_lesson_time,
        lesson_time::create_lesson_time,
        lesson_time::update_lesson_time,
        lesson_time::delete_lesson_time,
        lesson::get_lessons,
        lesson::get_lesson,
        lesson::create_lesson,
        lesson::update_lesson,
        lesson::delete_lesson,
        schedule::get_week_lessons_for_group,
        schedule::get_week_lessons_for_lecturer,
        schedule::get_month_lessons_for_group,
        schedule::get_month_lessons_for_lecturer,
    ),
    components(
        schemas(
            ErrorDto,
            MessageDto,
            FacultyDto,
            GroupDto,
            GenderDto,
            LecturerDto,
            StudentDto,
            LessonTimeDto,
            DayOfWeekDto,
            LessonDto,
            ScheduledLessonDto,
        )
    ),
    tags(
        (name = "faculties", description = "Faculties"),
        (name = "groups", description = "Student groups of a faculty"),
        (name = "lecturers", description = "Lecturers"),
        (name = "students", description = "Students of a group"),
        (name = "lesson-time-parameters", description = "Daily lesson time slots"),
        (name = "lessons", description = "Weekly recurring lessons"),
        (name = "schedule", description = "Week and month schedules of groups and lecturers"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/faculties", get(get_faculties).post(create_faculty))
        .route(
            "/faculties/{id}",
            get(get_faculty).patch(update_faculty).delete(delete_faculty),
        )
        .route("/groups", get(get_groups).post(create_group))
        .route(
            "/groups/{id}",
            get(get_group).patch(update_group).delete(delete_group),
        )
        .route("/lecturers", get(get_lecturers).post(create_lecturer))
        .route(
            "/lecturers/{id}",
            get(get_lecturer)
                .patch(update_lecturer)
                .delete(delete_lecturer),
        )
        .route("/students", get(get_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).patch(update_student).delete(delete_student),
        )
        .route(
            "/lesson-time-parameters",
            get(get_lesson_times).post(create_lesson_time),
        )
        .route(
            "/lesson-time-parameters/{id}",
            get(get_lesson_time)
                .patch(update_lesson_time)
                .delete(delete_lesson_time),
        )
        .route("/lessons", get(get_lessons).post(create_lesson))
        .route(
            "/lessons/{id}",
            get(get_lesson).patch(update_lesson).delete(delete_lesson),
        )
        .route(
            "/week-lessons/find-for-group",
            get(get_week_lessons_for_group),
        )
        .route(
            "/week-lessons/find-for-lecturer",
            get(get_week_lessons_for_lecturer),
        )
        .route(
            "/month-lessons/find-for-group",
            get(get_month_lessons_for_group),
        )
        .route(
            "/month-lessons/find-for-lecturer",
            get(get_month_lessons_for_lecturer),
        )
}

/// Builds the complete application: API routes, Swagger UI and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(router().with_state(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
