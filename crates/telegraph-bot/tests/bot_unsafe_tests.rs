#![allow(unsafe_code)]

//! `Bot::from_env` cases
//! Kept out of the library so it can stay under forbid(unsafe_code)

use serial_test::serial;
use telegraph_bot::prelude::*;

fn remove_env_var(key: &str) {
    unsafe {
        std::env::remove_var(key);
    }
}

fn set_env_var(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

fn clear_env() {
    remove_env_var(TELEGRAPH_BOT_API_TOKEN);
    remove_env_var(TELEGRAPH_BOT_API_URL);
}

#[test]
#[serial]
fn test_from_env_with_token_and_url() {
    set_env_var(TELEGRAPH_BOT_API_TOKEN, "123456:ABC");
    set_env_var(TELEGRAPH_BOT_API_URL, "http://localhost:8081");

    let bot = Bot::from_env();
    clear_env();
    let bot = bot.unwrap();
    assert_eq!(bot.base_api_url().as_str(), "http://localhost:8081/");
    let url = bot.get_parsed_url(Endpoint::GetMe, &[], None).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8081/bot123456:ABC/getMe");
}

#[test]
#[serial]
fn test_from_env_falls_back_to_configured_url() {
    clear_env();
    set_env_var(TELEGRAPH_BOT_API_TOKEN, "123456:ABC");

    let bot = Bot::from_env();
    clear_env();
    assert_eq!(
        bot.unwrap().base_api_url().as_str(),
        "https://api.telegram.org/"
    );
}

#[test]
#[serial]
fn test_from_env_missing_token() {
    clear_env();

    let err = Bot::from_env().unwrap_err();
    assert!(matches!(err, BotError::Config(_)));
}

#[test]
#[serial]
fn test_from_env_empty_token() {
    clear_env();
    set_env_var(TELEGRAPH_BOT_API_TOKEN, "");

    let result = Bot::from_env();
    clear_env();
    assert!(matches!(result, Err(BotError::Config(_))));
}

#[test]
#[serial]
fn test_from_env_invalid_url() {
    clear_env();
    set_env_var(TELEGRAPH_BOT_API_TOKEN, "123456:ABC");
    set_env_var(TELEGRAPH_BOT_API_URL, "not a url");

    let result = Bot::from_env();
    clear_env();
    assert!(matches!(result, Err(BotError::Url(_))));
}
