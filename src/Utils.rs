/// loading titration tasks from JSON files
pub mod load_from_file;
