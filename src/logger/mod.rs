pub mod session_printer;
