//! Data models module
//!
//! This module contains the DTOs mirrored from backend responses

pub mod attendance;
pub mod event;
pub mod lab_info;
pub mod member;
pub mod notice;
pub mod page;
pub mod project;

// Re-export commonly used models
pub use attendance::{Attendance, AttendanceStats};
pub use event::{CalendarEvent, EventCategory, EventRequest};
pub use lab_info::LabInfo;
pub use member::{
    ChangePasswordRequest, CreateMemberRequest, Member, ResetPasswordRequest, Role,
    UpdateMemberRequest, UpdateProfileRequest,
};
pub use notice::{
    AuthorRef, CreateNoticeRequest, Notice, NoticeAttachment, NoticeCategory, UpdateNoticeRequest,
};
pub use page::{Listing, Page};
pub use project::{Project, ProjectRequest, ProjectStatus};
