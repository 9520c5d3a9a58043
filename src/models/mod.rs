pub mod grade;
pub mod lesson;
pub mod ticket;
pub mod user;

pub use grade::{
    ClassStats, Grade, LessonGrade, NewGradeRequest, StudentGradeRow, TeacherGradeRow,
};
pub use lesson::{
    AttendanceRequest, AttendanceRow, EnrollmentRequest, Lesson, NewLessonRequest, StudentRef,
};
pub use ticket::{NewTicket, ReplyRequest, Ticket, TicketWithNames};
pub use user::{
    LoginRequest, LoginResponse, RegisterRequest, Role, TeacherRef, User, UserProfile,
};
