pub mod ask;
pub mod load;
