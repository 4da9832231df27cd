mod app_shell;
pub use app_shell::AppShell;

mod dashboard;
pub use dashboard::Dashboard;

mod verify_user;
pub use verify_user::VerifyUser;
