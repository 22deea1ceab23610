pub mod admin_home;
