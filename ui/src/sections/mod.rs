//! Landing page sections, in page order.

mod about;
mod contact;
mod courses;
mod gallery;
mod hero;
mod teachers;

pub use about::{About, AboutContent, Paragraph};
pub use contact::{Contact, ContactContent};
pub use courses::{Courses, CoursesContent};
pub use gallery::{Gallery, GalleryContent, PREVIEW_COUNT};
pub use hero::{Hero, HeroContent};
pub use teachers::{TeacherProfile, Teachers, TeachersContent};
