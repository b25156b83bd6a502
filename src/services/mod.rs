mod job_board;
mod user_store;

pub use job_board::JobBoard;
pub use user_store::UserStore;
