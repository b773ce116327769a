pub mod note_reader;
