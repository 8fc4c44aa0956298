//! Page components.

mod dashboard;
mod login;
mod new_user;
mod register;
mod sales;
mod users;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use new_user::NewUserPage;
pub use register::RegisterPage;
pub use sales::SalesPage;
pub use users::UsersPage;
