mod contact;
mod home;
mod not_found;
mod services;
mod shell;

pub use shell::{Shell, ShellProps};
