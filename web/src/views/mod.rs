mod components;

mod attendance;
pub use attendance::Attendance;

mod dashboard;
pub use dashboard::Dashboard;

mod register;
pub use register::Register;

mod settings;
pub use settings::Settings;

mod users;
pub use users::Users;
