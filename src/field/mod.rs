pub mod field_array;
pub mod variables;
