mod forms;
mod job;
mod user;

pub use forms::Credentials;
pub use job::Job;
pub use user::User;
