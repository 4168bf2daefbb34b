mod formatter;

pub use formatter::ConsoleSink;
