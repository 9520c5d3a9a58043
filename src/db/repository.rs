use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{
    AttendanceRow, Grade, Lesson, LessonGrade, NewGradeRequest, NewLessonRequest, NewTicket,
    Role, StudentGradeRow, StudentRef, TeacherGradeRow, TeacherRef, Ticket, TicketWithNames,
    User, UserProfile,
};

/// Lets handlers map a duplicate-email INSERT to a 400 instead of a
/// generic store error.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

// --- users ---

pub async fn insert_user(
    db: &SqlitePool,
    email: &str,
    password_hash: &str,
    full_name: &str,
    role: Role,
) -> Result<UserProfile, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        "INSERT INTO users (id, email, password_hash, full_name, role, created_at) VALUES (?, ?, ?, ?, ?, ?)"
    )
    .bind(&id)
    .bind(email)
    .bind(password_hash)
    .bind(full_name)
    .bind(role)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(UserProfile {
        id,
        email: email.to_string(),
        full_name: full_name.to_string(),
        role,
        created_at: now,
    })
}

pub async fn find_user_by_email(
    db: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, password_hash, full_name, role, created_at FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(db)
    .await
}

pub async fn fetch_users(db: &SqlitePool) -> Result<Vec<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(
        "SELECT id, email, full_name, role, created_at FROM users ORDER BY created_at DESC",
    )
    .fetch_all(db)
    .await
}

pub async fn fetch_teachers(db: &SqlitePool) -> Result<Vec<TeacherRef>, sqlx::Error> {
    sqlx::query_as::<_, TeacherRef>(
        "SELECT id, full_name FROM users WHERE role = 'teacher' ORDER BY full_name",
    )
    .fetch_all(db)
    .await
}

/// Deletes every ticket where the user is either party, then the user row,
/// in one transaction. A crash between the two statements can never leave
/// orphaned tickets or a half-deleted user.
pub async fn delete_user_with_tickets(db: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let mut tx = db.begin().await?;

    sqlx::query("DELETE FROM tickets WHERE student_id = ? OR teacher_id = ?")
        .bind(id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let deleted = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;
    Ok(deleted > 0)
}

// --- tickets ---

pub async fn insert_ticket(db: &SqlitePool, req: NewTicket) -> Result<Ticket, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO tickets
            (id, student_id, teacher_id, subject, message, attachment,
            response, responded_at, created_at)
        VALUES (?, ?, ?, ?, ?, ?, NULL, NULL, ?)
        "#,
    )
    .bind(&id)
    .bind(&req.student_id)
    .bind(&req.teacher_id)
    .bind(&req.subject)
    .bind(&req.message)
    .bind(&req.attachment)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Ticket {
        id,
        student_id: req.student_id,
        teacher_id: req.teacher_id,
        subject: req.subject,
        message: req.message,
        attachment: req.attachment,
        response: None,
        responded_at: None,
        created_at: now,
    })
}

const TICKET_WITH_NAMES: &str = r#"
    SELECT
        t.id, t.student_id, t.teacher_id, t.subject, t.message, t.attachment,
        t.response, t.responded_at, t.created_at,
        s.full_name AS student_name,
        te.full_name AS teacher_name
    FROM tickets t
    JOIN users s ON s.id = t.student_id
    JOIN users te ON te.id = t.teacher_id
"#;

pub async fn fetch_tickets_for_student(
    db: &SqlitePool,
    student_id: &str,
) -> Result<Vec<TicketWithNames>, sqlx::Error> {
    let sql = format!("{TICKET_WITH_NAMES} WHERE t.student_id = ? ORDER BY t.created_at DESC");
    sqlx::query_as::<_, TicketWithNames>(&sql)
        .bind(student_id)
        .fetch_all(db)
        .await
}

pub async fn fetch_tickets_for_teacher(
    db: &SqlitePool,
    teacher_id: &str,
) -> Result<Vec<TicketWithNames>, sqlx::Error> {
    let sql = format!("{TICKET_WITH_NAMES} WHERE t.teacher_id = ? ORDER BY t.created_at DESC");
    sqlx::query_as::<_, TicketWithNames>(&sql)
        .bind(teacher_id)
        .fetch_all(db)
        .await
}

pub async fn fetch_all_tickets(db: &SqlitePool) -> Result<Vec<TicketWithNames>, sqlx::Error> {
    let sql = format!("{TICKET_WITH_NAMES} ORDER BY t.created_at DESC");
    sqlx::query_as::<_, TicketWithNames>(&sql).fetch_all(db).await
}

/// Writes `response` and the server-assigned `responded_at` in a single
/// UPDATE. A second reply overwrites both.
pub async fn reply_to_ticket(
    db: &SqlitePool,
    id: &str,
    response: &str,
) -> Result<bool, sqlx::Error> {
    let now = Utc::now().to_rfc3339();
    let updated = sqlx::query("UPDATE tickets SET response = ?, responded_at = ? WHERE id = ?")
        .bind(response)
        .bind(&now)
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();
    Ok(updated > 0)
}

pub async fn find_ticket_by_id(db: &SqlitePool, id: &str) -> Result<Option<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(
        "SELECT id, student_id, teacher_id, subject, message, attachment, response, responded_at, created_at FROM tickets WHERE id = ?"
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

// --- lessons & enrollment ---

pub async fn insert_lesson(
    db: &SqlitePool,
    req: NewLessonRequest,
) -> Result<Lesson, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO lessons
            (id, teacher_id, title, date, time, description, location, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&req.teacher_id)
    .bind(&req.title)
    .bind(&req.date)
    .bind(&req.time)
    .bind(&req.description)
    .bind(&req.location)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Lesson {
        id,
        teacher_id: req.teacher_id,
        title: req.title,
        date: req.date,
        time: req.time,
        description: req.description,
        location: req.location,
        created_at: now,
    })
}

pub async fn fetch_lessons(db: &SqlitePool) -> Result<Vec<Lesson>, sqlx::Error> {
    sqlx::query_as::<_, Lesson>(
        "SELECT id, teacher_id, title, date, time, description, location, created_at FROM lessons ORDER BY date, time"
    )
    .fetch_all(db)
    .await
}

pub async fn fetch_lessons_for_student(
    db: &SqlitePool,
    student_id: &str,
) -> Result<Vec<Lesson>, sqlx::Error> {
    sqlx::query_as::<_, Lesson>(
        r#"
        SELECT l.id, l.teacher_id, l.title, l.date, l.time, l.description,
               l.location, l.created_at
        FROM lessons l
        JOIN enrollments e ON e.lesson_id = l.id
        WHERE e.student_id = ?
        ORDER BY l.date, l.time
        "#,
    )
    .bind(student_id)
    .fetch_all(db)
    .await
}

pub async fn fetch_students_for_lesson(
    db: &SqlitePool,
    lesson_id: &str,
) -> Result<Vec<StudentRef>, sqlx::Error> {
    sqlx::query_as::<_, StudentRef>(
        r#"
        SELECT u.id, u.full_name, u.email
        FROM users u
        JOIN enrollments e ON e.student_id = u.id
        WHERE e.lesson_id = ?
        ORDER BY u.full_name
        "#,
    )
    .bind(lesson_id)
    .fetch_all(db)
    .await
}

/// Idempotent: the (lesson_id, student_id) primary key absorbs retried
/// sign-ups without creating duplicate rows.
pub async fn sign_up(
    db: &SqlitePool,
    lesson_id: &str,
    student_id: &str,
) -> Result<(), sqlx::Error> {
    let now = Utc::now().to_rfc3339();
    sqlx::query(
        r#"
        INSERT INTO enrollments (lesson_id, student_id, created_at)
        VALUES (?, ?, ?)
        ON CONFLICT (lesson_id, student_id) DO NOTHING
        "#,
    )
    .bind(lesson_id)
    .bind(student_id)
    .bind(&now)
    .execute(db)
    .await?;
    Ok(())
}

/// Removing a missing enrollment is a no-op success.
pub async fn unsign(
    db: &SqlitePool,
    lesson_id: &str,
    student_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM enrollments WHERE lesson_id = ? AND student_id = ?")
        .bind(lesson_id)
        .bind(student_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn set_attendance(
    db: &SqlitePool,
    lesson_id: &str,
    student_id: &str,
    present: bool,
) -> Result<(), sqlx::Error> {
    let now = Utc::now().to_rfc3339();
    sqlx::query(
        r#"
        INSERT INTO attendance (lesson_id, student_id, present, updated_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (lesson_id, student_id)
        DO UPDATE SET present = excluded.present, updated_at = excluded.updated_at
        "#,
    )
    .bind(lesson_id)
    .bind(student_id)
    .bind(present)
    .bind(&now)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn fetch_attendance(
    db: &SqlitePool,
    lesson_id: &str,
) -> Result<Vec<AttendanceRow>, sqlx::Error> {
    sqlx::query_as::<_, AttendanceRow>(
        r#"
        SELECT a.student_id, u.full_name, a.present
        FROM attendance a
        JOIN users u ON u.id = a.student_id
        WHERE a.lesson_id = ?
        ORDER BY u.full_name
        "#,
    )
    .bind(lesson_id)
    .fetch_all(db)
    .await
}

// --- grades ---

pub async fn insert_grade(
    db: &SqlitePool,
    req: NewGradeRequest,
) -> Result<Grade, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO grades
            (id, lesson_id, student_id, teacher_id, grade, comment, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&req.lesson_id)
    .bind(&req.student_id)
    .bind(&req.teacher_id)
    .bind(req.grade)
    .bind(&req.comment)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Grade {
        id,
        lesson_id: req.lesson_id,
        student_id: req.student_id,
        teacher_id: req.teacher_id,
        grade: req.grade,
        comment: req.comment,
        created_at: now,
    })
}

pub async fn fetch_grades_for_student(
    db: &SqlitePool,
    student_id: &str,
) -> Result<Vec<StudentGradeRow>, sqlx::Error> {
    sqlx::query_as::<_, StudentGradeRow>(
        r#"
        SELECT
            g.id, g.lesson_id, g.grade, g.comment, g.created_at,
            l.title AS lesson_title,
            l.date AS lesson_date,
            l.time AS lesson_time,
            u.full_name AS teacher_name
        FROM grades g
        JOIN lessons l ON l.id = g.lesson_id
        JOIN users u ON u.id = g.teacher_id
        WHERE g.student_id = ?
        ORDER BY g.created_at DESC
        "#,
    )
    .bind(student_id)
    .fetch_all(db)
    .await
}

pub async fn fetch_grades_for_teacher(
    db: &SqlitePool,
    teacher_id: &str,
) -> Result<Vec<TeacherGradeRow>, sqlx::Error> {
    sqlx::query_as::<_, TeacherGradeRow>(
        r#"
        SELECT
            g.id, g.lesson_id, g.grade, g.comment, g.created_at,
            u.full_name AS student_name,
            l.title AS lesson_title,
            l.date AS lesson_date
        FROM grades g
        JOIN lessons l ON l.id = g.lesson_id
        JOIN users u ON u.id = g.student_id
        WHERE g.teacher_id = ?
        ORDER BY g.created_at DESC
        "#,
    )
    .bind(teacher_id)
    .fetch_all(db)
    .await
}

/// All grade rows for one lesson, oldest first, so the last row per student
/// is that student's most recent grade.
pub async fn fetch_lesson_grades(
    db: &SqlitePool,
    lesson_id: &str,
) -> Result<Vec<LessonGrade>, sqlx::Error> {
    sqlx::query_as::<_, LessonGrade>(
        "SELECT student_id, grade, created_at FROM grades WHERE lesson_id = ? ORDER BY created_at",
    )
    .bind(lesson_id)
    .fetch_all(db)
    .await
}
