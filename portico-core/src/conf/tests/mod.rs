mod primitives_tests;
mod store_tests;
