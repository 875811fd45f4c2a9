pub mod console_macros;
