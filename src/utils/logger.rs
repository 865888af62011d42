use colored::Colorize;

pub struct Logger {}

#[allow(dead_code)]
impl Logger {
    pub fn info<T: std::fmt::Display>(message: T) {
        println!("{} {}", "[INFO]".green(), message);
    }

    pub fn warn<T: std::fmt::Display>(message: T) {
        println!("{} {}", "[WARN]".yellow(), message);
    }

    pub fn error<T: std::fmt::Display>(message: T) {
        eprintln!("{} {}", "[ERROR]".red(), message);
    }
}
