pub mod charts;
pub mod cloud;
pub mod panels;
pub mod table;
