pub mod all_error;
