pub mod birthday;
pub mod directory;
pub mod field;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use directory::{Directory, UpcomingBirthday};
pub use field::Field;
pub use name::Name;
pub use phone::{PhoneNumber, PHONE_DIGITS};
pub use record::Record;
