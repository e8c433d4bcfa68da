mod customer;
mod helper;
mod inventory;
