pub mod debug_logging;
