pub mod admin_management_page;
pub mod app;
pub mod bookings_page;
pub mod customers_page;
pub mod dashboard_layout;
pub mod login_screen;
pub mod plans_page;
pub mod route_guard;
pub mod vendors_page;

pub use admin_management_page::AdminManagementPage;
pub use app::App;
pub use bookings_page::BookingsPage;
pub use customers_page::CustomersPage;
pub use dashboard_layout::DashboardLayout;
pub use login_screen::LoginScreen;
pub use plans_page::PlansPage;
pub use route_guard::RouteGuard;
pub use vendors_page::VendorsPage;
