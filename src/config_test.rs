use super::*;

use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers hold [`lock_env`] so no other test touches the environment.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = lock_env();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_parses_overrides() {
    let _guard = lock_env();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = lock_env();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "http");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_bind_addr() {
    let _guard = lock_env();
    unsafe {
        clear_server_env();
        std::env::set_var("BIND_ADDR", "localhost:80");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid BIND_ADDR"));

    unsafe { clear_server_env() };
}
