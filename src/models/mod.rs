mod user;
pub use user::{ProfileView, PublicUser, User, UserRole};

mod claims;
pub use claims::{AuthUser, Claims};

mod subscription;
pub use subscription::{Subscription, SubscriptionStatus};

mod course;
pub use course::{Course, CourseSummary};

mod lesson;
pub use lesson::{Lesson, LessonProgress, LessonWithProgress};

mod chat;
pub use chat::{ChatMessage, ChatRole};
