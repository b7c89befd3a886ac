pub mod index_range;
