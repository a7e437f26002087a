pub mod common;
pub mod couple;
pub mod oocyte_donor;
pub mod sperm_donor;
