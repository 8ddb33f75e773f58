pub use super::admin::Entity as Admin;
pub use super::hostel::Entity as Hostel;
pub use super::leave_application::Entity as LeaveApplication;
pub use super::maintenance_request::Entity as MaintenanceRequest;
pub use super::notice::Entity as Notice;
pub use super::student::Entity as Student;
