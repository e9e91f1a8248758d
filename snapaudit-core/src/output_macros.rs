//! User-facing output macros.
//!
//! Flow text goes to stdout; confirmations, warnings and errors go to
//! stderr so they survive output redirection.

#[macro_export]
macro_rules! audit_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! audit_success {
    ($($arg:tt)*) => {
        eprintln!("✓ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! audit_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! audit_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}
