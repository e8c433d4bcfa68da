pub mod employee;
pub mod employee_db;
pub mod employee_error;
