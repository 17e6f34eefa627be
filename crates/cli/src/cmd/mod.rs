pub mod clean;
pub mod doctor;
pub mod output;
pub mod scan;
