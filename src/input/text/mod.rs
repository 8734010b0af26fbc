pub mod complex_fields;
